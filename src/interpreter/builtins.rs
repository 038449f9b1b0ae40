//! The fixed table of names bound into the global frame at interpreter
//! construction (`spec.md` §4.4, arities and behavior resolved against
//! `examples/original_source/hanlang_interpreter.py`'s `_setup_builtins`).
//!
//! Each entry is a variant of the closed [`Builtin`] enum rather than a
//! `dyn Fn`, matching `spec.md` §9's "tagged-union dispatch" guidance: one
//! exhaustive `match` in [`Builtin::call`] instead of virtual dispatch.

use std::rc::Rc;

use rand::Rng;

use crate::interpreter::control::{rt_err, EvalResult, Unwind};
use crate::interpreter::value::{value_to_dict_key, HanDict, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Len,
    ToInt,
    ToFloat,
    ToStr,
    TypeOf,
    Range,
    Abs,
    Max,
    Min,
    Sum,
    Sort,
    Reverse,
    Append,
    Remove,
    Contains,
    Sqrt,
    Pow,
    Ceil,
    Floor,
    Round,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Log10,
    Random,
    RandInt,
    Upper,
    Lower,
    Split,
    Join,
    Replace,
    Strip,
    LStrip,
    RStrip,
    Find,
    StartsWith,
    EndsWith,
    Slice,
    RepeatStr,
    Center,
    LJust,
    RJust,
    Keys,
    Values,
    Items,
    NewDict,
    Insert,
    Pop,
    IndexOf,
    Count,
    Copy,
    Clear,
}

/// Every builtin's bound name, used to populate the global frame. Order
/// matches the table in `SPEC_FULL.md` §7.
pub const BUILTINS: &[(&str, Builtin)] = &[
    ("길이", Builtin::Len),
    ("정수변환", Builtin::ToInt),
    ("실수변환", Builtin::ToFloat),
    ("문자열변환", Builtin::ToStr),
    ("타입", Builtin::TypeOf),
    ("범위", Builtin::Range),
    ("절대값", Builtin::Abs),
    ("최대값", Builtin::Max),
    ("최소값", Builtin::Min),
    ("합계", Builtin::Sum),
    ("정렬", Builtin::Sort),
    ("뒤집기", Builtin::Reverse),
    ("추가", Builtin::Append),
    ("제거", Builtin::Remove),
    ("포함", Builtin::Contains),
    ("제곱근", Builtin::Sqrt),
    ("거듭제곱", Builtin::Pow),
    ("올림", Builtin::Ceil),
    ("내림", Builtin::Floor),
    ("반올림", Builtin::Round),
    ("사인", Builtin::Sin),
    ("코사인", Builtin::Cos),
    ("탄젠트", Builtin::Tan),
    ("아크사인", Builtin::Asin),
    ("아크코사인", Builtin::Acos),
    ("아크탄젠트", Builtin::Atan),
    ("로그", Builtin::Log),
    ("로그10", Builtin::Log10),
    ("랜덤", Builtin::Random),
    ("랜덤정수", Builtin::RandInt),
    ("대문자", Builtin::Upper),
    ("소문자", Builtin::Lower),
    ("분리", Builtin::Split),
    ("결합", Builtin::Join),
    ("교체", Builtin::Replace),
    ("공백제거", Builtin::Strip),
    ("왼쪽공백제거", Builtin::LStrip),
    ("오른쪽공백제거", Builtin::RStrip),
    ("찾기", Builtin::Find),
    ("시작확인", Builtin::StartsWith),
    ("끝확인", Builtin::EndsWith),
    ("자르기", Builtin::Slice),
    ("반복문자", Builtin::RepeatStr),
    ("채우기", Builtin::Center),
    ("왼쪽채우기", Builtin::LJust),
    ("오른쪽채우기", Builtin::RJust),
    ("키값들", Builtin::Keys),
    ("값들", Builtin::Values),
    ("항목들", Builtin::Items),
    ("딕셔너리", Builtin::NewDict),
    ("삽입", Builtin::Insert),
    ("빼기", Builtin::Pop),
    ("인덱스", Builtin::IndexOf),
    ("개수", Builtin::Count),
    ("복사", Builtin::Copy),
    ("비우기", Builtin::Clear),
];

/// Constants bound directly as `Value::Float`, not callables (`spec.md` §9 /
/// `SPEC_FULL.md` §7: the reference binds these as bare values).
pub const CONSTANTS: &[(&str, f64)] = &[
    ("파이", std::f64::consts::PI),
    ("자연상수", std::f64::consts::E),
    ("무한대", f64::INFINITY),
];

fn as_number(v: &Value) -> EvalResult<f64> {
    match v {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        _ => Err(rt_err(format!("숫자가 필요하지만 {}이(가) 전달되었습니다", v.type_name()))),
    }
}

fn as_int(v: &Value) -> EvalResult<i64> {
    match v {
        Value::Int(i) => Ok(*i),
        Value::Float(f) => Ok(*f as i64),
        _ => Err(rt_err(format!("정수가 필요하지만 {}이(가) 전달되었습니다", v.type_name()))),
    }
}

fn as_str(v: &Value) -> EvalResult<Rc<String>> {
    match v {
        Value::Str(s) => Ok(s.clone()),
        _ => Err(rt_err(format!("문자열이 필요하지만 {}이(가) 전달되었습니다", v.type_name()))),
    }
}

fn as_list(v: &Value) -> EvalResult<Rc<std::cell::RefCell<Vec<Value>>>> {
    match v {
        Value::List(l) => Ok(l.clone()),
        _ => Err(rt_err(format!("리스트가 필요하지만 {}이(가) 전달되었습니다", v.type_name()))),
    }
}

fn wrong_arity(name: &str, expected: &str, got: usize) -> Unwind {
    rt_err(format!(
        "내장 함수 '{name}'은(는) {expected}개의 인자가 필요하지만 {got}개가 전달되었습니다"
    ))
}

impl Builtin {
    pub fn name(self) -> &'static str {
        BUILTINS
            .iter()
            .find(|(_, b)| *b == self)
            .map(|(n, _)| *n)
            .expect("every Builtin variant is listed in BUILTINS")
    }

    pub fn call(self, args: &[Value]) -> EvalResult<Value> {
        use Builtin::*;

        macro_rules! need {
            ($n:expr) => {
                if args.len() != $n {
                    return Err(wrong_arity(self.name(), &$n.to_string(), args.len()));
                }
            };
        }

        match self {
            Len => {
                need!(1);
                Ok(Value::Int(match &args[0] {
                    Value::Str(s) => s.chars().count() as i64,
                    Value::List(l) => l.borrow().len() as i64,
                    Value::Dict(d) => d.borrow().len() as i64,
                    other => {
                        return Err(rt_err(format!("{}의 길이를 구할 수 없습니다", other.type_name())))
                    }
                }))
            }
            ToInt => {
                need!(1);
                Ok(Value::Int(match &args[0] {
                    Value::Int(i) => *i,
                    Value::Float(f) => *f as i64,
                    Value::Bool(b) => *b as i64,
                    Value::Str(s) => s
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| rt_err(format!("'{s}'을(를) 정수로 변환할 수 없습니다")))?
                        as i64,
                    other => {
                        return Err(rt_err(format!(
                            "{}을(를) 정수로 변환할 수 없습니다",
                            other.type_name()
                        )))
                    }
                }))
            }
            ToFloat => {
                need!(1);
                Ok(Value::Float(match &args[0] {
                    Value::Int(i) => *i as f64,
                    Value::Float(f) => *f,
                    Value::Bool(b) => {
                        if *b {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    Value::Str(s) => s
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| rt_err(format!("'{s}'을(를) 실수로 변환할 수 없습니다")))?,
                    other => {
                        return Err(rt_err(format!(
                            "{}을(를) 실수로 변환할 수 없습니다",
                            other.type_name()
                        )))
                    }
                }))
            }
            ToStr => {
                need!(1);
                Ok(Value::str(args[0].to_string()))
            }
            TypeOf => {
                need!(1);
                Ok(Value::str(args[0].type_name()))
            }
            Range => {
                if args.is_empty() || args.len() > 3 {
                    return Err(wrong_arity(self.name(), "1-3", args.len()));
                }
                let (start, stop, step) = match args.len() {
                    1 => (0, as_int(&args[0])?, 1),
                    2 => (as_int(&args[0])?, as_int(&args[1])?, 1),
                    _ => (as_int(&args[0])?, as_int(&args[1])?, as_int(&args[2])?),
                };
                if step == 0 {
                    return Err(rt_err("범위의 간격은 0일 수 없습니다"));
                }
                let mut items = vec![];
                let mut i = start;
                if step > 0 {
                    while i < stop {
                        items.push(Value::Int(i));
                        i += step;
                    }
                } else {
                    while i > stop {
                        items.push(Value::Int(i));
                        i += step;
                    }
                }
                Ok(Value::list(items))
            }
            Abs => {
                need!(1);
                Ok(match &args[0] {
                    Value::Int(i) => Value::Int(i.abs()),
                    other => Value::Float(as_number(other)?.abs()),
                })
            }
            Max => reduce_extreme(args, self.name(), |a, b| cmp_values(a, b).map(|o| o.is_gt())),
            Min => reduce_extreme(args, self.name(), |a, b| cmp_values(a, b).map(|o| o.is_lt())),
            Sum => {
                need!(1);
                let list = as_list(&args[0])?;
                let mut int_sum: i64 = 0;
                let mut float_sum: f64 = 0.0;
                let mut is_float = false;
                for item in list.borrow().iter() {
                    match item {
                        Value::Int(i) => {
                            int_sum += i;
                            float_sum += *i as f64;
                        }
                        Value::Float(f) => {
                            is_float = true;
                            float_sum += f;
                        }
                        other => {
                            return Err(rt_err(format!(
                                "{}의 합계를 구할 수 없습니다",
                                other.type_name()
                            )))
                        }
                    }
                }
                Ok(if is_float {
                    Value::Float(float_sum)
                } else {
                    Value::Int(int_sum)
                })
            }
            Sort => {
                need!(1);
                let list = as_list(&args[0])?;
                let mut items = list.borrow().clone();
                let mut err = None;
                items.sort_by(|a, b| match cmp_values(a, b) {
                    Ok(o) => o,
                    Err(e) => {
                        err = Some(e);
                        std::cmp::Ordering::Equal
                    }
                });
                if let Some(e) = err {
                    return Err(e);
                }
                Ok(Value::list(items))
            }
            Reverse => {
                need!(1);
                Ok(match &args[0] {
                    Value::List(l) => {
                        let mut items = l.borrow().clone();
                        items.reverse();
                        Value::list(items)
                    }
                    Value::Str(s) => Value::str(s.chars().rev().collect::<String>()),
                    other => {
                        return Err(rt_err(format!("{}을(를) 뒤집을 수 없습니다", other.type_name())))
                    }
                })
            }
            Append => {
                need!(2);
                let list = as_list(&args[0])?;
                list.borrow_mut().push(args[1].clone());
                Ok(args[0].clone())
            }
            Remove => {
                need!(2);
                let list = as_list(&args[0])?;
                let idx = list
                    .borrow()
                    .iter()
                    .position(|v| v.loosely_equals(&args[1]));
                match idx {
                    Some(i) => {
                        list.borrow_mut().remove(i);
                        Ok(args[0].clone())
                    }
                    None => Err(rt_err("리스트에 해당 항목이 없습니다")),
                }
            }
            Contains => {
                need!(2);
                Ok(Value::Bool(match &args[0] {
                    Value::List(l) => l.borrow().iter().any(|v| v.loosely_equals(&args[1])),
                    Value::Dict(d) => match value_to_dict_key(&args[1]) {
                        Some(key) => d.borrow().get(&key).is_some(),
                        None => false,
                    },
                    Value::Str(s) => match &args[1] {
                        Value::Str(sub) => s.contains(sub.as_str()),
                        _ => return Err(rt_err("문자열의 포함 여부는 문자열로만 확인할 수 있습니다")),
                    },
                    other => {
                        return Err(rt_err(format!(
                            "{}에 포함 여부를 확인할 수 없습니다",
                            other.type_name()
                        )))
                    }
                }))
            }
            Sqrt => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.sqrt()))
            }
            Pow => {
                need!(2);
                Ok(Value::Float(as_number(&args[0])?.powf(as_number(&args[1])?)))
            }
            Ceil => {
                need!(1);
                Ok(Value::Int(as_number(&args[0])?.ceil() as i64))
            }
            Floor => {
                need!(1);
                Ok(Value::Int(as_number(&args[0])?.floor() as i64))
            }
            Round => {
                if args.is_empty() || args.len() > 2 {
                    return Err(wrong_arity(self.name(), "1-2", args.len()));
                }
                let x = as_number(&args[0])?;
                let digits = if args.len() == 2 { as_int(&args[1])? } else { 0 };
                let factor = 10f64.powi(digits as i32);
                let rounded = (x * factor).round() / factor;
                if digits <= 0 {
                    Ok(Value::Int(rounded as i64))
                } else {
                    Ok(Value::Float(rounded))
                }
            }
            Sin => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.sin()))
            }
            Cos => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.cos()))
            }
            Tan => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.tan()))
            }
            Asin => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.asin()))
            }
            Acos => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.acos()))
            }
            Atan => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.atan()))
            }
            Log => {
                if args.is_empty() || args.len() > 2 {
                    return Err(wrong_arity(self.name(), "1-2", args.len()));
                }
                let x = as_number(&args[0])?;
                if args.len() == 2 {
                    Ok(Value::Float(x.log(as_number(&args[1])?)))
                } else {
                    Ok(Value::Float(x.ln()))
                }
            }
            Log10 => {
                need!(1);
                Ok(Value::Float(as_number(&args[0])?.log10()))
            }
            Random => {
                need!(0);
                Ok(Value::Float(rand::thread_rng().gen_range(0.0..1.0)))
            }
            RandInt => {
                need!(2);
                let a = as_int(&args[0])?;
                let b = as_int(&args[1])?;
                if a > b {
                    return Err(rt_err("랜덤정수의 범위가 올바르지 않습니다"));
                }
                Ok(Value::Int(rand::thread_rng().gen_range(a..=b)))
            }
            Upper => {
                need!(1);
                Ok(Value::str(as_str(&args[0])?.to_uppercase()))
            }
            Lower => {
                need!(1);
                Ok(Value::str(as_str(&args[0])?.to_lowercase()))
            }
            Split => {
                if args.is_empty() || args.len() > 2 {
                    return Err(wrong_arity(self.name(), "1-2", args.len()));
                }
                let s = as_str(&args[0])?;
                let sep = if args.len() == 2 {
                    as_str(&args[1])?
                } else {
                    Rc::new(" ".to_owned())
                };
                Ok(Value::list(
                    s.split(sep.as_str()).map(Value::str).collect(),
                ))
            }
            Join => {
                need!(2);
                let sep = as_str(&args[0])?;
                let list = as_list(&args[1])?;
                let joined = list
                    .borrow()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(sep.as_str());
                Ok(Value::str(joined))
            }
            Replace => {
                need!(3);
                let s = as_str(&args[0])?;
                let old = as_str(&args[1])?;
                let new = as_str(&args[2])?;
                Ok(Value::str(s.replace(old.as_str(), new.as_str())))
            }
            Strip => {
                need!(1);
                Ok(Value::str(as_str(&args[0])?.trim().to_owned()))
            }
            LStrip => {
                need!(1);
                Ok(Value::str(as_str(&args[0])?.trim_start().to_owned()))
            }
            RStrip => {
                need!(1);
                Ok(Value::str(as_str(&args[0])?.trim_end().to_owned()))
            }
            Find => {
                need!(2);
                let s = as_str(&args[0])?;
                let sub = as_str(&args[1])?;
                Ok(Value::Int(match s.find(sub.as_str()) {
                    Some(byte_idx) => s[..byte_idx].chars().count() as i64,
                    None => -1,
                }))
            }
            StartsWith => {
                need!(2);
                Ok(Value::Bool(as_str(&args[0])?.starts_with(as_str(&args[1])?.as_str())))
            }
            EndsWith => {
                need!(2);
                Ok(Value::Bool(as_str(&args[0])?.ends_with(as_str(&args[1])?.as_str())))
            }
            Slice => {
                if args.is_empty() || args.len() > 3 {
                    return Err(wrong_arity(self.name(), "1-3", args.len()));
                }
                let s = as_str(&args[0])?;
                let chars: Vec<char> = s.chars().collect();
                let len = chars.len() as i64;
                let start = if args.len() >= 2 { as_int(&args[1])? } else { 0 };
                let end = if args.len() == 3 { as_int(&args[2])? } else { len };
                let clamp = |i: i64| -> usize {
                    let i = if i < 0 { (len + i).max(0) } else { i };
                    i.clamp(0, len) as usize
                };
                let (start, end) = (clamp(start), clamp(end));
                if start >= end {
                    return Ok(Value::str(""));
                }
                Ok(Value::str(chars[start..end].iter().collect::<String>()))
            }
            RepeatStr => {
                need!(2);
                let s = as_str(&args[0])?;
                let n = as_int(&args[1])?.max(0) as usize;
                Ok(Value::str(s.repeat(n)))
            }
            Center => {
                if args.len() < 2 || args.len() > 3 {
                    return Err(wrong_arity(self.name(), "2-3", args.len()));
                }
                let s = as_str(&args[0])?;
                let width = as_int(&args[1])? as usize;
                let fill = if args.len() == 3 {
                    as_str(&args[2])?.chars().next().unwrap_or(' ')
                } else {
                    ' '
                };
                Ok(Value::str(pad_center(&s, width, fill)))
            }
            LJust => {
                if args.len() < 2 || args.len() > 3 {
                    return Err(wrong_arity(self.name(), "2-3", args.len()));
                }
                let s = as_str(&args[0])?;
                let width = as_int(&args[1])? as usize;
                let fill = if args.len() == 3 {
                    as_str(&args[2])?.chars().next().unwrap_or(' ')
                } else {
                    ' '
                };
                let len = s.chars().count();
                let mut out = s.to_string();
                if len < width {
                    out.extend(std::iter::repeat(fill).take(width - len));
                }
                Ok(Value::str(out))
            }
            RJust => {
                if args.len() < 2 || args.len() > 3 {
                    return Err(wrong_arity(self.name(), "2-3", args.len()));
                }
                let s = as_str(&args[0])?;
                let width = as_int(&args[1])? as usize;
                let fill = if args.len() == 3 {
                    as_str(&args[2])?.chars().next().unwrap_or(' ')
                } else {
                    ' '
                };
                let len = s.chars().count();
                let mut out: String = if len < width {
                    std::iter::repeat(fill).take(width - len).collect()
                } else {
                    String::new()
                };
                out.push_str(&s);
                Ok(Value::str(out))
            }
            Keys => {
                need!(1);
                match &args[0] {
                    Value::Dict(d) => Ok(Value::list(d.borrow().keys().cloned().collect())),
                    other => Err(rt_err(format!("{}의 키를 구할 수 없습니다", other.type_name()))),
                }
            }
            Values => {
                need!(1);
                match &args[0] {
                    Value::Dict(d) => Ok(Value::list(d.borrow().values().cloned().collect())),
                    other => Err(rt_err(format!("{}의 값을 구할 수 없습니다", other.type_name()))),
                }
            }
            Items => {
                need!(1);
                match &args[0] {
                    Value::Dict(d) => Ok(Value::list(
                        d.borrow()
                            .iter()
                            .map(|(k, v)| Value::list(vec![k.clone(), v.clone()]))
                            .collect(),
                    )),
                    other => Err(rt_err(format!("{}의 항목을 구할 수 없습니다", other.type_name()))),
                }
            }
            NewDict => {
                need!(0);
                Ok(Value::Dict(Rc::new(std::cell::RefCell::new(HanDict::new()))))
            }
            Insert => {
                need!(3);
                let list = as_list(&args[0])?;
                let i = as_int(&args[1])?;
                let len = list.borrow().len() as i64;
                let idx = i.clamp(0, len) as usize;
                list.borrow_mut().insert(idx, args[2].clone());
                Ok(args[0].clone())
            }
            Pop => {
                if args.is_empty() || args.len() > 2 {
                    return Err(wrong_arity(self.name(), "1-2", args.len()));
                }
                let list = as_list(&args[0])?;
                let len = list.borrow().len() as i64;
                if len == 0 {
                    return Err(rt_err("빈 리스트에서는 꺼낼 수 없습니다"));
                }
                let i = if args.len() == 2 { as_int(&args[1])? } else { -1 };
                let idx = if i < 0 { i + len } else { i };
                if idx < 0 || idx >= len {
                    return Err(rt_err("인덱스가 범위를 벗어났습니다"));
                }
                Ok(list.borrow_mut().remove(idx as usize))
            }
            IndexOf => {
                need!(2);
                let list = as_list(&args[0])?;
                let found = list.borrow().iter().position(|v| v.loosely_equals(&args[1]));
                match found {
                    Some(i) => Ok(Value::Int(i as i64)),
                    None => Err(rt_err("리스트에 해당 항목이 없습니다")),
                }
            }
            Count => {
                need!(2);
                let list = as_list(&args[0])?;
                let n = list.borrow().iter().filter(|v| v.loosely_equals(&args[1])).count();
                Ok(Value::Int(n as i64))
            }
            Copy => {
                need!(1);
                Ok(match &args[0] {
                    Value::List(l) => Value::list(l.borrow().clone()),
                    Value::Dict(d) => Value::Dict(Rc::new(std::cell::RefCell::new(d.borrow().clone()))),
                    other => {
                        return Err(rt_err(format!("{}은(는) 복사할 수 없습니다", other.type_name())))
                    }
                })
            }
            Clear => {
                need!(1);
                let list = as_list(&args[0])?;
                list.borrow_mut().clear();
                Ok(args[0].clone())
            }
        }
    }
}

fn reduce_extreme(
    args: &[Value],
    name: &str,
    is_new_extreme: impl Fn(&Value, &Value) -> EvalResult<bool>,
) -> EvalResult<Value> {
    if args.is_empty() {
        return Err(wrong_arity(name, "1+", 0));
    }
    let items: Vec<Value> = if args.len() == 1 {
        match &args[0] {
            Value::List(l) => l.borrow().clone(),
            _ => args.to_vec(),
        }
    } else {
        args.to_vec()
    };

    if items.is_empty() {
        return Err(rt_err("빈 리스트에는 적용할 수 없습니다"));
    }

    let mut best = items[0].clone();
    for item in &items[1..] {
        if is_new_extreme(item, &best)? {
            best = item.clone();
        }
    }
    Ok(best)
}

fn cmp_values(a: &Value, b: &Value) -> EvalResult<std::cmp::Ordering> {
    use Value::*;
    match (a, b) {
        (Int(_) | Float(_), Int(_) | Float(_)) => {
            let (x, y) = (as_number(a)?, as_number(b)?);
            x.partial_cmp(&y)
                .ok_or_else(|| rt_err("숫자를 비교할 수 없습니다 (NaN)"))
        }
        (Str(x), Str(y)) => Ok(x.cmp(y)),
        _ => Err(rt_err(format!(
            "{}와(과) {}을(를) 비교할 수 없습니다",
            a.type_name(),
            b.type_name()
        ))),
    }
}

fn pad_center(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_owned();
    }
    let total = width - len;
    let left = total / 2;
    let right = total - left;
    let mut out: String = std::iter::repeat(fill).take(left).collect();
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_chars_not_bytes() {
        assert_eq!(Builtin::Len.call(&[Value::str("한글")]).unwrap(), Value::Int(2));
    }

    #[test]
    fn range_is_exclusive_of_stop() {
        let Value::List(l) = Builtin::Range.call(&[Value::Int(3)]).unwrap() else {
            panic!("expected list");
        };
        assert_eq!(*l.borrow(), vec![Value::Int(0), Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn sum_promotes_to_float_when_any_element_is_float() {
        let list = Value::list(vec![Value::Int(1), Value::Float(2.5)]);
        assert_eq!(Builtin::Sum.call(&[list]).unwrap(), Value::Float(3.5));
    }

    #[test]
    fn append_mutates_and_returns_the_list() {
        let list = Value::list(vec![Value::Int(1)]);
        let result = Builtin::Append.call(&[list.clone(), Value::Int(2)]).unwrap();
        let Value::List(l) = result else { panic!("expected list") };
        assert_eq!(*l.borrow(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn index_of_missing_item_is_a_runtime_error() {
        let list = Value::list(vec![Value::Int(1)]);
        assert!(Builtin::IndexOf.call(&[list, Value::Int(9)]).is_err());
    }
}
