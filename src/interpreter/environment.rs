use std::collections::{HashMap, HashSet};

use crate::interpreter::control::{rt_err, EvalResult};
use crate::interpreter::value::Value;

/// Index into an [`Environment`]'s frame arena. `Copy`, so captured closures
/// just store one of these instead of a reference-counted parent pointer —
/// there is no cycle to leak, since a frame never owns its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvId(usize);

struct Frame {
    vars: HashMap<String, Value>,
    consts: HashSet<String>,
    parent: Option<EnvId>,
}

/// Arena of lexical scopes. A single `Environment` backs an entire script
/// run; child scopes (function calls, blocks, loop bodies) are frames that
/// outlive their creating call only as long as something still references
/// their `EnvId` (e.g. a closure).
#[derive(Default)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame {
                vars: HashMap::new(),
                consts: HashSet::new(),
                parent: None,
            }],
        }
    }

    pub fn root(&self) -> EnvId {
        EnvId(0)
    }

    pub fn child_of(&mut self, parent: EnvId) -> EnvId {
        self.frames.push(Frame {
            vars: HashMap::new(),
            consts: HashSet::new(),
            parent: Some(parent),
        });
        EnvId(self.frames.len() - 1)
    }

    pub fn define(&mut self, env: EnvId, name: impl Into<String>, value: Value, is_const: bool) {
        let name = name.into();
        let frame = &mut self.frames[env.0];
        if is_const {
            frame.consts.insert(name.clone());
        }
        frame.vars.insert(name, value);
    }

    pub fn get(&self, env: EnvId, name: &str) -> EvalResult<Value> {
        let mut current = Some(env);
        while let Some(id) = current {
            let frame = &self.frames[id.0];
            if let Some(value) = frame.vars.get(name) {
                return Ok(value.clone());
            }
            current = frame.parent;
        }
        Err(rt_err(format!("정의되지 않은 변수: {name}")))
    }

    pub fn set(&mut self, env: EnvId, name: &str, value: Value) -> EvalResult<()> {
        let mut current = Some(env);
        while let Some(id) = current {
            let frame = &mut self.frames[id.0];
            if frame.vars.contains_key(name) {
                if frame.consts.contains(name) {
                    return Err(rt_err(format!("상수는 변경할 수 없습니다: {name}")));
                }
                frame.vars.insert(name.to_owned(), value);
                return Ok(());
            }
            current = frame.parent;
        }
        Err(rt_err(format!("정의되지 않은 변수: {name}")))
    }
}
