//! Tree-walking evaluator: recursive dispatch on [`Expr`]/[`Stmt`] variants
//! against an [`Environment`] frame, threading [`Unwind`] for non-local
//! exits and errors (`spec.md` §4.3, §9).

pub mod builtins;
pub mod control;
pub mod environment;
pub mod value;

use std::fmt;
use std::rc::Rc;

use crate::ast::*;
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};

use self::builtins::{Builtin, BUILTINS, CONSTANTS};
use self::control::{rt_err, EvalResult, RuntimeError, Unwind};
use self::environment::{EnvId, Environment};
use self::value::{
    value_to_dict_key, ClassValue, FunctionValue, HanDict, InstanceValue, LambdaValue, Value,
};

/// The constructor method name (`spec.md` §6's "Constructor name").
const CONSTRUCTOR: &str = "생성";
/// The implicit receiver binding inside a method body (`spec.md`'s "Self name").
const SELF_NAME: &str = "나";

/// Everything `run` can fail with, surfaced to the embedder per `spec.md` §6.
#[derive(Debug)]
pub enum RunError {
    Lex(LexError),
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Lex(e) => write!(f, "{e}"),
            RunError::Parse(e) => write!(f, "{e}"),
            RunError::Runtime(e) => write!(f, "런타임 오류: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<LexError> for RunError {
    fn from(e: LexError) -> Self {
        RunError::Lex(e)
    }
}

impl From<ParseError> for RunError {
    fn from(e: ParseError) -> Self {
        RunError::Parse(e)
    }
}

/// The interpreter carries no hidden global state beyond its own fields: an
/// [`Environment`] arena and the two embedder callbacks (`spec.md` §4.3).
pub struct Interpreter {
    env: Environment,
    globals: EnvId,
    output: Box<dyn FnMut(&str)>,
    input: Box<dyn FnMut(&str) -> String>,
}

impl Interpreter {
    pub fn new(
        output: impl FnMut(&str) + 'static,
        input: impl FnMut(&str) -> String + 'static,
    ) -> Self {
        let mut env = Environment::new();
        let globals = env.root();

        for (name, builtin) in BUILTINS {
            env.define(globals, *name, Value::Builtin(*builtin), false);
        }
        for (name, value) in CONSTANTS {
            env.define(globals, *name, Value::Float(*value), false);
        }

        Self {
            env,
            globals,
            output: Box::new(output),
            input: Box::new(input),
        }
    }

    /// Lexes, parses, and executes a full program (`spec.md` §6's `run`).
    pub fn run(&mut self, source: &str) -> Result<(), RunError> {
        let tokens = Lexer::new(source).lex()?;
        let program = Parser::parse(tokens)?;
        let globals = self.globals;
        match self.exec_block(&program.statements, globals) {
            Ok(()) => Ok(()),
            Err(Unwind::RuntimeError(e)) => Err(RunError::Runtime(e)),
            Err(Unwind::Throw(v)) => Err(RunError::Runtime(RuntimeError {
                message: format!("처리되지 않은 예외: {v}"),
            })),
            // A top-level 반환/중단/계속 outside any function/loop: treat as a
            // no-op fall-through, matching the reference's lack of a
            // top-level try/except around execute().
            Err(Unwind::Return(_) | Unwind::Break | Unwind::Continue) => Ok(()),
        }
    }

    fn exec_block(&mut self, statements: &[Stmt], env: EnvId) -> EvalResult<()> {
        for stmt in statements {
            self.exec_stmt(stmt, env)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt, env: EnvId) -> EvalResult<()> {
        match stmt {
            Stmt::VarDecl(decl) => self.exec_var_decl(decl, env),
            Stmt::Assign(assign) => self.exec_assign(assign, env).map(|_| ()),
            Stmt::FuncDecl(decl) => {
                let func = Value::Function(Rc::new(FunctionValue {
                    name: decl.name.clone(),
                    params: decl.params.clone(),
                    body: decl.body.clone(),
                    closure: env,
                }));
                self.env.define(env, decl.name.clone(), func, false);
                Ok(())
            }
            Stmt::Return(ret) => {
                let value = match &ret.value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Nil,
                };
                Err(Unwind::Return(value))
            }
            Stmt::If(if_stmt) => self.exec_if(if_stmt, env),
            Stmt::For(for_stmt) => self.exec_for(for_stmt, env),
            Stmt::While(while_stmt) => self.exec_while(while_stmt, env),
            Stmt::Break(_) => Err(Unwind::Break),
            Stmt::Continue(_) => Err(Unwind::Continue),
            Stmt::Print(print) => self.exec_print(print, env),
            Stmt::ClassDecl(decl) => self.exec_class_decl(decl, env),
            Stmt::Try(try_stmt) => self.exec_try(try_stmt, env),
            Stmt::Throw(throw) => {
                let value = self.eval(&throw.value, env)?;
                Err(Unwind::Throw(value))
            }
            Stmt::Expr(expr) => self.eval(expr, env).map(|_| ()),
        }
    }

    fn exec_var_decl(&mut self, decl: &VarDecl, env: EnvId) -> EvalResult<()> {
        let value = match &decl.value {
            Some(expr) => self.eval(expr, env)?,
            None => Value::Nil,
        };
        self.env.define(env, decl.name.clone(), value, decl.is_const);
        Ok(())
    }

    fn exec_if(&mut self, if_stmt: &If, env: EnvId) -> EvalResult<()> {
        if self.eval(&if_stmt.cond, env)?.is_truthy() {
            self.exec_block(&if_stmt.then_block, env)
        } else if let Some(else_block) = &if_stmt.else_block {
            self.exec_block(else_block, env)
        } else {
            Ok(())
        }
    }

    fn exec_for(&mut self, for_stmt: &For, env: EnvId) -> EvalResult<()> {
        let start = as_loop_bound(self.eval(&for_stmt.start, env)?)?;
        let end = as_loop_bound(self.eval(&for_stmt.end, env)?)?;
        let loop_env = self.env.child_of(env);

        let mut i = start;
        while i <= end {
            self.env.define(loop_env, for_stmt.var.clone(), Value::Int(i), false);
            match self.exec_block(&for_stmt.body, loop_env) {
                Ok(()) => {}
                Err(Unwind::Break) => break,
                Err(Unwind::Continue) => {}
                Err(other) => return Err(other),
            }
            i += 1;
        }
        Ok(())
    }

    fn exec_while(&mut self, while_stmt: &While, env: EnvId) -> EvalResult<()> {
        while self.eval(&while_stmt.cond, env)?.is_truthy() {
            match self.exec_block(&while_stmt.body, env) {
                Ok(()) => {}
                Err(Unwind::Break) => break,
                Err(Unwind::Continue) => {}
                Err(other) => return Err(other),
            }
        }
        Ok(())
    }

    fn exec_print(&mut self, print: &Print, env: EnvId) -> EvalResult<()> {
        let mut rendered = Vec::with_capacity(print.values.len());
        for expr in &print.values {
            rendered.push(self.eval(expr, env)?.to_string());
        }
        (self.output)(&rendered.join(" "));
        Ok(())
    }

    fn exec_class_decl(&mut self, decl: &ClassDecl, env: EnvId) -> EvalResult<()> {
        let mut methods = std::collections::HashMap::new();
        for stmt in &decl.body {
            if let Stmt::FuncDecl(func) = stmt {
                methods.insert(
                    func.name.clone(),
                    Rc::new(FunctionValue {
                        name: func.name.clone(),
                        params: func.params.clone(),
                        body: func.body.clone(),
                        closure: env,
                    }),
                );
            }
        }
        let class = Value::Class(Rc::new(ClassValue {
            name: decl.name.clone(),
            methods,
        }));
        self.env.define(env, decl.name.clone(), class, false);
        Ok(())
    }

    fn exec_try(&mut self, try_stmt: &Try, env: EnvId) -> EvalResult<()> {
        let outcome = self.exec_block(&try_stmt.try_block, env);

        let after_catch = match outcome {
            Err(Unwind::Throw(value)) => self.run_catch(try_stmt, env, value),
            Err(Unwind::RuntimeError(err)) => self.run_catch(try_stmt, env, Value::str(err.message)),
            other => other,
        };

        match &try_stmt.finally_block {
            None => after_catch,
            Some(finally) => match self.exec_block(finally, env) {
                // finally completed normally: the try/catch outcome (value,
                // non-local exit, or still-uncaught error) passes through.
                Ok(()) => after_catch,
                // finally itself exits or raises: that outcome wins, per
                // `spec.md` §7 ("last-writer-wins on the exit").
                finally_outcome => finally_outcome,
            },
        }
    }

    fn run_catch(&mut self, try_stmt: &Try, env: EnvId, caught: Value) -> EvalResult<()> {
        match &try_stmt.catch_block {
            None => Ok(()),
            Some(catch_block) => {
                let catch_env = self.env.child_of(env);
                if let Some(name) = &try_stmt.catch_var {
                    self.env.define(catch_env, name.clone(), caught, false);
                }
                self.exec_block(catch_block, catch_env)
            }
        }
    }

    fn exec_assign(&mut self, assign: &Assign, env: EnvId) -> EvalResult<Value> {
        let rhs = self.eval(&assign.value, env)?;

        let new_value = if assign.op == AssignOp::Assign {
            rhs
        } else {
            let current = self.eval(&assign.target, env)?;
            let op = match assign.op {
                AssignOp::AddAssign => BinOp::Add,
                AssignOp::SubAssign => BinOp::Sub,
                AssignOp::MulAssign => BinOp::Mul,
                AssignOp::DivAssign => BinOp::Div,
                AssignOp::Assign => unreachable!(),
            };
            apply_binary(op, current, rhs)?
        };

        self.assign_to(&assign.target, env, new_value.clone())?;
        Ok(new_value)
    }

    fn assign_to(&mut self, target: &Expr, env: EnvId, value: Value) -> EvalResult<()> {
        match target {
            Expr::Ident(ident) => self.env.set(env, &ident.name, value),
            Expr::Index(index) => {
                let container = self.eval(&index.target, env)?;
                let key = self.eval(&index.index, env)?;
                match container {
                    Value::List(list) => {
                        let i = as_index(&key, list.borrow().len())?;
                        list.borrow_mut()[i] = value;
                        Ok(())
                    }
                    Value::Dict(dict) => {
                        let dict_key = value_to_dict_key(&key)
                            .ok_or_else(|| rt_err("해당 값은 딕셔너리 키로 사용할 수 없습니다"))?;
                        dict.borrow_mut().insert(dict_key, key, value);
                        Ok(())
                    }
                    other => Err(rt_err(format!("{}에는 인덱스로 대입할 수 없습니다", other.type_name()))),
                }
            }
            Expr::Attribute(attr) => {
                let target_value = self.eval(&attr.target, env)?;
                match target_value {
                    Value::Instance(instance) => {
                        instance.borrow_mut().fields.insert(attr.attr.clone(), value);
                        Ok(())
                    }
                    other => Err(rt_err(format!(
                        "{}에는 속성을 대입할 수 없습니다",
                        other.type_name()
                    ))),
                }
            }
            _ => Err(rt_err("잘못된 대입 대상입니다")),
        }
    }

    fn eval(&mut self, expr: &Expr, env: EnvId) -> EvalResult<Value> {
        match expr {
            Expr::Number(NumberLit::Int(i)) => Ok(Value::Int(*i)),
            Expr::Number(NumberLit::Float(f)) => Ok(Value::Float(*f)),
            Expr::Str(s) => Ok(Value::str(s.clone())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Nil => Ok(Value::Nil),
            Expr::List(list) => {
                let mut items = Vec::with_capacity(list.items.len());
                for item in &list.items {
                    items.push(self.eval(item, env)?);
                }
                Ok(Value::list(items))
            }
            Expr::Dict(dict) => {
                let mut map = HanDict::new();
                for (key_expr, value_expr) in &dict.pairs {
                    let key = self.eval(key_expr, env)?;
                    let value = self.eval(value_expr, env)?;
                    let dict_key = value_to_dict_key(&key)
                        .ok_or_else(|| rt_err("해당 값은 딕셔너리 키로 사용할 수 없습니다"))?;
                    map.insert(dict_key, key, value);
                }
                Ok(Value::Dict(Rc::new(std::cell::RefCell::new(map))))
            }
            Expr::Ident(ident) => self.env.get(env, &ident.name),
            Expr::Binary(bin) => self.eval_binary(bin, env),
            Expr::Unary(un) => self.eval_unary(un, env),
            Expr::Ternary(t) => {
                if self.eval(&t.cond, env)?.is_truthy() {
                    self.eval(&t.then_value, env)
                } else {
                    self.eval(&t.else_value, env)
                }
            }
            Expr::Call(call) => self.eval_call(call, env),
            Expr::Index(index) => self.eval_index(index, env),
            Expr::Attribute(attr) => self.eval_attribute(attr, env),
            Expr::Input(input) => self.eval_input(input, env),
            Expr::Lambda(lambda) => Ok(Value::Lambda(Rc::new(LambdaValue {
                params: lambda.params.clone(),
                body: (*lambda.body).clone(),
                closure: env,
            }))),
        }
    }

    fn eval_binary(&mut self, bin: &BinaryOp, env: EnvId) -> EvalResult<Value> {
        // `그리고`/`또는` short-circuit and return the determining operand
        // unmodified (`spec.md` §4.3), so they are handled before operands
        // are both evaluated.
        match bin.op {
            BinOp::And => {
                let left = self.eval(&bin.lhs, env)?;
                if !left.is_truthy() {
                    return Ok(left);
                }
                return self.eval(&bin.rhs, env);
            }
            BinOp::Or => {
                let left = self.eval(&bin.lhs, env)?;
                if left.is_truthy() {
                    return Ok(left);
                }
                return self.eval(&bin.rhs, env);
            }
            _ => {}
        }

        let left = self.eval(&bin.lhs, env)?;
        let right = self.eval(&bin.rhs, env)?;
        apply_binary(bin.op, left, right)
    }

    fn eval_unary(&mut self, un: &UnaryOp, env: EnvId) -> EvalResult<Value> {
        let operand = self.eval(&un.operand, env)?;
        match un.op {
            UnOp::Neg => match operand {
                Value::Int(i) => Ok(Value::Int(-i)),
                Value::Float(f) => Ok(Value::Float(-f)),
                other => Err(rt_err(format!("{}은(는) 부호를 바꿀 수 없습니다", other.type_name()))),
            },
            UnOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        }
    }

    fn eval_input(&mut self, input: &Input, env: EnvId) -> EvalResult<Value> {
        let prompt = match &input.prompt {
            Some(expr) => self.eval(expr, env)?.to_string(),
            None => String::new(),
        };
        Ok(Value::str((self.input)(&prompt)))
    }

    fn eval_index(&mut self, index: &Index, env: EnvId) -> EvalResult<Value> {
        let target = self.eval(&index.target, env)?;
        let key = self.eval(&index.index, env)?;

        match target {
            Value::List(list) => {
                let items = list.borrow();
                let i = as_index(&key, items.len())?;
                Ok(items[i].clone())
            }
            Value::Str(s) => {
                let chars: Vec<char> = s.chars().collect();
                let i = as_index(&key, chars.len())?;
                Ok(Value::str(chars[i].to_string()))
            }
            Value::Dict(dict) => {
                let dict_key = value_to_dict_key(&key)
                    .ok_or_else(|| rt_err("해당 값은 딕셔너리 키로 사용할 수 없습니다"))?;
                dict.borrow()
                    .get(&dict_key)
                    .cloned()
                    .ok_or_else(|| rt_err("딕셔너리에 해당 키가 없습니다"))
            }
            other => Err(rt_err(format!("{}에는 인덱스로 접근할 수 없습니다", other.type_name()))),
        }
    }

    fn eval_attribute(&mut self, attr: &Attribute, env: EnvId) -> EvalResult<Value> {
        let target = self.eval(&attr.target, env)?;
        match target {
            Value::Instance(instance) => {
                if let Some(field) = instance.borrow().fields.get(&attr.attr) {
                    return Ok(field.clone());
                }
                let method = instance.borrow().class.methods.get(&attr.attr).cloned();
                match method {
                    Some(method) => Ok(Value::BoundMethod(instance, method)),
                    None => Err(rt_err(format!(
                        "'{}'에 '{}' 속성이 없습니다",
                        instance.borrow().class.name,
                        attr.attr
                    ))),
                }
            }
            other => Err(rt_err(format!(
                "'{}'에는 '{}' 속성이 없습니다",
                other.type_name(),
                attr.attr
            ))),
        }
    }

    fn eval_call(&mut self, call: &Call, env: EnvId) -> EvalResult<Value> {
        let callee = self.eval(&call.callee, env)?;
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.eval(arg, env)?);
        }
        self.call_value(callee, args)
    }

    fn call_value(&mut self, callee: Value, args: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Builtin(builtin) => builtin.call(&args),
            Value::Function(func) => self.call_function(&func, args, None),
            Value::Lambda(lambda) => self.call_lambda(&lambda, args),
            Value::BoundMethod(instance, method) => self.call_function(&method, args, Some(instance)),
            Value::Class(class) => self.construct(&class, args),
            other => Err(rt_err(format!("{}은(는) 호출할 수 없습니다", other.type_name()))),
        }
    }

    fn call_function(
        &mut self,
        func: &Rc<FunctionValue>,
        args: Vec<Value>,
        receiver: Option<Rc<std::cell::RefCell<InstanceValue>>>,
    ) -> EvalResult<Value> {
        if args.len() != func.params.len() {
            return Err(rt_err(format!(
                "함수 '{}'은(는) {}개의 인자가 필요하지만 {}개가 전달되었습니다",
                func.name,
                func.params.len(),
                args.len()
            )));
        }

        let call_env = self.env.child_of(func.closure);
        if let Some(receiver) = receiver {
            self.env.define(call_env, SELF_NAME, Value::Instance(receiver), false);
        }
        for (name, value) in func.params.iter().zip(args) {
            self.env.define(call_env, name.clone(), value, false);
        }

        match self.exec_block(&func.body, call_env) {
            Ok(()) => Ok(Value::Nil),
            Err(Unwind::Return(value)) => Ok(value),
            Err(other) => Err(other),
        }
    }

    fn call_lambda(&mut self, lambda: &Rc<LambdaValue>, args: Vec<Value>) -> EvalResult<Value> {
        if args.len() != lambda.params.len() {
            return Err(rt_err(format!(
                "람다 함수는 {}개의 인자가 필요하지만 {}개가 전달되었습니다",
                lambda.params.len(),
                args.len()
            )));
        }

        let call_env = self.env.child_of(lambda.closure);
        for (name, value) in lambda.params.iter().zip(args) {
            self.env.define(call_env, name.clone(), value, false);
        }
        self.eval(&lambda.body, call_env)
    }

    fn construct(&mut self, class: &Rc<ClassValue>, args: Vec<Value>) -> EvalResult<Value> {
        let instance = Rc::new(std::cell::RefCell::new(InstanceValue {
            class: class.clone(),
            fields: std::collections::HashMap::new(),
        }));

        if let Some(ctor) = class.methods.get(CONSTRUCTOR) {
            // A `반환` inside the constructor ends only the constructor
            // body; the class-call expression still yields the instance
            // (`SPEC_FULL.md` §5's "Non-local exits inside 생성").
            match self.call_function(ctor, args, Some(instance.clone())) {
                Ok(_) => {}
                Err(Unwind::Return(_)) => {}
                Err(other) => return Err(other),
            }
        }

        Ok(Value::Instance(instance))
    }
}

fn as_loop_bound(value: Value) -> EvalResult<i64> {
    match value {
        Value::Int(i) => Ok(i),
        Value::Float(f) => Ok(f.trunc() as i64),
        other => Err(rt_err(format!(
            "반복 범위는 숫자여야 하지만 {}이(가) 전달되었습니다",
            other.type_name()
        ))),
    }
}

fn as_index(value: &Value, len: usize) -> EvalResult<usize> {
    let i = match value {
        Value::Int(i) => *i,
        Value::Float(f) => *f as i64,
        other => return Err(rt_err(format!("인덱스는 정수여야 하지만 {}이(가) 전달되었습니다", other.type_name()))),
    };
    let normalized = if i < 0 { i + len as i64 } else { i };
    if normalized < 0 || normalized as usize >= len {
        return Err(rt_err(format!("인덱스 {i}가 범위를 벗어났습니다")));
    }
    Ok(normalized as usize)
}

/// Operator semantics for every [`BinOp`] except `그리고`/`또는`, which
/// short-circuit and are handled in [`Interpreter::eval_binary`] before both
/// operands are evaluated.
fn apply_binary(op: BinOp, left: Value, right: Value) -> EvalResult<Value> {
    use Value::*;
    match op {
        BinOp::Add => match (left, right) {
            (Int(a), Int(b)) => Ok(Int(a + b)),
            (Str(a), Str(b)) => Ok(Value::str(format!("{a}{b}"))),
            (List(a), List(b)) => {
                let mut items = a.borrow().clone();
                items.extend(b.borrow().iter().cloned());
                Ok(Value::list(items))
            }
            (a, b) if is_numeric(&a) && is_numeric(&b) => Ok(Float(as_f64(&a)? + as_f64(&b)?)),
            (a, b) => Err(rt_err(format!(
                "{}와(과) {}은(는) 더할 수 없습니다",
                a.type_name(),
                b.type_name()
            ))),
        },
        BinOp::Sub => numeric_op(left, right, "빼기", |a, b| a - b, |a, b| a - b),
        BinOp::Mul => numeric_op(left, right, "곱하기", |a, b| a * b, |a, b| a * b),
        BinOp::Div => {
            let (a, b) = (as_f64(&left)?, as_f64(&right)?);
            if b == 0.0 {
                return Err(rt_err("0으로 나눌 수 없습니다"));
            }
            Ok(Float(a / b))
        }
        BinOp::Rem => match (left, right) {
            (Int(a), Int(b)) => {
                if b == 0 {
                    return Err(rt_err("0으로 나눌 수 없습니다"));
                }
                Ok(Int(a % b))
            }
            (a, b) => {
                let bf = as_f64(&b)?;
                if bf == 0.0 {
                    return Err(rt_err("0으로 나눌 수 없습니다"));
                }
                Ok(Float(as_f64(&a)? % bf))
            }
        },
        BinOp::Pow => Ok(Float(as_f64(&left)?.powf(as_f64(&right)?))),
        BinOp::Eq => Ok(Bool(left.loosely_equals(&right))),
        BinOp::Ne => Ok(Bool(!left.loosely_equals(&right))),
        BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge => compare(op, &left, &right),
        BinOp::And | BinOp::Or => unreachable!("short-circuit ops handled in eval_binary"),
    }
}

fn numeric_op(
    left: Value,
    right: Value,
    verb: &str,
    int_op: impl Fn(i64, i64) -> i64,
    float_op: impl Fn(f64, f64) -> f64,
) -> EvalResult<Value> {
    use Value::*;
    match (&left, &right) {
        (Int(a), Int(b)) => Ok(Int(int_op(*a, *b))),
        (a, b) if is_numeric(a) && is_numeric(b) => Ok(Float(float_op(as_f64(a)?, as_f64(b)?))),
        (a, b) => Err(rt_err(format!(
            "{}와(과) {}은(는) {verb}할 수 없습니다",
            a.type_name(),
            b.type_name()
        ))),
    }
}

fn compare(op: BinOp, left: &Value, right: &Value) -> EvalResult<Value> {
    use std::cmp::Ordering;
    let ordering = match (left, right) {
        (a, b) if is_numeric(a) && is_numeric(b) => as_f64(a)?
            .partial_cmp(&as_f64(b)?)
            .ok_or_else(|| rt_err("숫자를 비교할 수 없습니다 (NaN)"))?,
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (a, b) => {
            return Err(rt_err(format!(
                "{}와(과) {}은(는) 비교할 수 없습니다",
                a.type_name(),
                b.type_name()
            )))
        }
    };
    let result = match op {
        BinOp::Lt => ordering == Ordering::Less,
        BinOp::Gt => ordering == Ordering::Greater,
        BinOp::Le => ordering != Ordering::Greater,
        BinOp::Ge => ordering != Ordering::Less,
        _ => unreachable!(),
    };
    Ok(Value::Bool(result))
}

fn is_numeric(v: &Value) -> bool {
    matches!(v, Value::Int(_) | Value::Float(_))
}

fn as_f64(v: &Value) -> EvalResult<f64> {
    match v {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(rt_err(format!("{}은(는) 숫자가 아닙니다", other.type_name()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn run_capturing(source: &str) -> Vec<String> {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink = lines.clone();
        let mut interp = Interpreter::new(move |line: &str| sink.borrow_mut().push(line.to_owned()), |_| String::new());
        interp.run(source).expect("program should run");
        drop(interp);
        Rc::try_unwrap(lines).unwrap().into_inner()
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(run_capturing("변수 x = 3 + 4 * 2\n출력(x)"), vec!["11"]);
    }

    #[test]
    fn recursive_function() {
        let src = "함수 fact(n){ 만약 n<=1 { 반환 1 } 반환 n*fact(n-1) } 출력(fact(5))";
        assert_eq!(run_capturing(src), vec!["120"]);
    }

    #[test]
    fn inclusive_for_loop() {
        assert_eq!(
            run_capturing("반복 i = 1 : 3 { 출력(i) }"),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn try_catch_finally_runs_in_order() {
        let src = r#"시도 { 던지기 "boom" } 잡기 (e) { 출력(e) } 마침내 { 출력("done") }"#;
        assert_eq!(run_capturing(src), vec!["boom", "done"]);
    }

    #[test]
    fn lambda_call() {
        assert_eq!(run_capturing("변수 더하기 = (x,y) => x+y\n출력(더하기(2,3))"), vec!["5"]);
    }

    #[test]
    fn class_instance_method() {
        let src = r#"
클래스 P {
    함수 생성(n) { 나.n = n }
    함수 g() { 반환 나.n }
}
변수 p = P(7)
출력(p.g())
"#;
        assert_eq!(run_capturing(src), vec!["7"]);
    }

    #[test]
    fn division_by_zero_is_catchable() {
        let src = r#"시도 { 출력(1/0) } 잡기 (e) { 출력("error") }"#;
        assert_eq!(run_capturing(src), vec!["error"]);
    }

    #[test]
    fn const_reassignment_is_a_runtime_error() {
        let mut interp = Interpreter::new(|_| {}, |_| String::new());
        let result = interp.run("상수 k = 1\nk = 2");
        assert!(result.is_err());
    }

    #[test]
    fn short_circuit_and_or() {
        // a side-effecting function on the right of `그리고`/`또는` must not
        // run when the left operand already determines the result.
        let src = r#"
변수 호출됨 = 거짓
함수 부작용() { 호출됨 = 참 반환 참 }
변수 a = 거짓 그리고 부작용()
변수 b = 참 또는 부작용()
출력(호출됨)
"#;
        assert_eq!(run_capturing(src), vec!["거짓"]);
    }

    #[test]
    fn closure_captures_enclosing_scope_by_reference() {
        let src = r#"
함수 만들기() {
    변수 count = 0
    함수 증가() { count = count + 1 반환 count }
    반환 증가
}
변수 inc = 만들기()
출력(inc())
출력(inc())
"#;
        assert_eq!(run_capturing(src), vec!["1", "2"]);
    }

    #[test]
    fn integer_float_equality() {
        assert_eq!(run_capturing("출력(1 == 1.0)"), vec!["참"]);
    }

    #[test]
    fn float_prints_with_trailing_zero() {
        assert_eq!(run_capturing("출력(3.0)"), vec!["3.0"]);
    }

    #[test]
    fn zero_and_empty_collections_are_truthy() {
        let src = r#"만약 0 { 출력("t") } 아니면 { 출력("f") }"#;
        assert_eq!(run_capturing(src), vec!["t"]);
    }

    #[test]
    fn empty_dicts_compare_structurally_equal() {
        assert_eq!(run_capturing("출력({} == {})"), vec!["참"]);
    }
}
