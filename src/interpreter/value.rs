use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::{Expr, Stmt};
use crate::interpreter::builtins::Builtin;
use crate::interpreter::environment::EnvId;

/// A HanLang runtime value.
///
/// `List`/`Dict`/`Instance` are reference-counted and interior-mutable so that
/// two bindings to the same list or instance alias the same storage, matching
/// the reference interpreter's Python object semantics.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(Rc<String>),
    Bool(bool),
    Nil,
    List(Rc<RefCell<Vec<Value>>>),
    Dict(Rc<RefCell<HanDict>>),
    Function(Rc<FunctionValue>),
    Lambda(Rc<LambdaValue>),
    Class(Rc<ClassValue>),
    Instance(Rc<RefCell<InstanceValue>>),
    BoundMethod(Rc<RefCell<InstanceValue>>, Rc<FunctionValue>),
    Builtin(Builtin),
}

#[derive(Debug)]
pub struct FunctionValue {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub closure: EnvId,
}

#[derive(Debug)]
pub struct LambdaValue {
    pub params: Vec<String>,
    pub body: Expr,
    pub closure: EnvId,
}

#[derive(Debug)]
pub struct ClassValue {
    pub name: String,
    pub methods: HashMap<String, Rc<FunctionValue>>,
}

#[derive(Debug)]
pub struct InstanceValue {
    pub class: Rc<ClassValue>,
    pub fields: HashMap<String, Value>,
}

/// A dictionary key, normalized so that an `Integer` and the equal `Float`
/// collide (e.g. `1`과 `1.0`은 같은 키).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictKey {
    Int(i64),
    Float(u64),
    Str(String),
    Bool(bool),
    Nil,
}

/// An insertion-ordered, last-write-wins dictionary.
#[derive(Debug, Clone, Default)]
pub struct HanDict {
    order: Vec<DictKey>,
    entries: HashMap<DictKey, (Value, Value)>,
}

impl HanDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: DictKey, key_value: Value, value: Value) {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, (key_value, value));
    }

    pub fn get(&self, key: &DictKey) -> Option<&Value> {
        self.entries.get(key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &DictKey) -> Option<Value> {
        if self.entries.contains_key(key) {
            self.order.retain(|k| k != key);
        }
        self.entries.remove(key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.order
            .iter()
            .map(move |k| self.entries.get(k).map(|(kv, v)| (kv, v)).unwrap())
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.iter().map(|(_, v)| v)
    }
}

/// Normalizes a value into a dictionary key, or `None` if it isn't hashable
/// (lists, dicts, functions, lambdas, classes, instances, bound methods).
pub fn value_to_dict_key(value: &Value) -> Option<DictKey> {
    match value {
        Value::Int(i) => Some(DictKey::Int(*i)),
        Value::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                Some(DictKey::Int(*f as i64))
            } else {
                Some(DictKey::Float(f.to_bits()))
            }
        }
        Value::Str(s) => Some(DictKey::Str(s.as_str().to_owned())),
        Value::Bool(b) => Some(DictKey::Bool(*b)),
        Value::Nil => Some(DictKey::Nil),
        _ => None,
    }
}

/// Structural equality used by Rust-side tests (`assert_eq!`), not the guest
/// language's `==` (which is [`Value::loosely_equals`] and lives in the
/// interpreter's binary-op dispatch). Callables compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Nil, Nil) => true,
            (List(a), List(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Dict(a), Dict(b)) => Rc::ptr_eq(a, b),
            (Function(a), Function(b)) => Rc::ptr_eq(a, b),
            (Lambda(a), Lambda(b)) => Rc::ptr_eq(a, b),
            (Class(a), Class(b)) => Rc::ptr_eq(a, b),
            (Instance(a), Instance(b)) => Rc::ptr_eq(a, b),
            (BoundMethod(a, m), BoundMethod(b, n)) => Rc::ptr_eq(a, b) && Rc::ptr_eq(m, n),
            (Builtin(a), Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(Rc::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// Only `없음` and `거짓` are falsy (`spec.md` §4.3): unlike Python, zero
    /// and empty collections are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }

    /// Loose numeric equality: an `Integer` and the equal `Float` compare
    /// equal, as do structurally-equal lists/dicts.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => (*a as f64) == *b,
            (Str(a), Str(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Nil, Nil) => true,
            (List(a), List(b)) => {
                let a = a.borrow();
                let b = b.borrow();
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.loosely_equals(y))
            }
            (Dict(a), Dict(b)) => {
                let a = a.borrow();
                let b = b.borrow();
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        value_to_dict_key(k)
                            .and_then(|key| b.get(&key))
                            .is_some_and(|bv| v.loosely_equals(bv))
                    })
            }
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "정수",
            Value::Float(_) => "실수",
            Value::Str(_) => "문자열",
            Value::Bool(_) => "불리언",
            Value::Nil => "없음",
            Value::List(_) => "리스트",
            Value::Dict(_) => "딕셔너리",
            Value::Function(_) => "함수",
            Value::Lambda(_) => "람다",
            Value::Class(_) => "클래스",
            Value::Instance(_) => "인스턴스",
            Value::BoundMethod(_, _) => "메서드",
            Value::Builtin(_) => "내장함수",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            // Integer-valued floats always print with a trailing `.0`.
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{}", if *b { "참" } else { "거짓" }),
            Value::Nil => write!(f, "없음"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Dict(dict) => {
                write!(f, "{{")?;
                for (i, (k, v)) in dict.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => write!(f, "<함수 {}>", func.name),
            Value::Lambda(lambda) => write!(f, "<람다 ({})>", lambda.params.join(", ")),
            Value::Class(class) => write!(f, "<클래스 {}>", class.name),
            Value::Instance(instance) => write!(f, "<{} 인스턴스>", instance.borrow().class.name),
            Value::BoundMethod(instance, method) => {
                write!(f, "<바인딩된 메서드 {}.{}>", instance.borrow().class.name, method.name)
            }
            Value::Builtin(_) => write!(f, "<내장함수>"),
        }
    }
}
