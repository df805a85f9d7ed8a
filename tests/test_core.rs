use rat_text::upos_type;
use rat_wheel_input::core::{
    focus_lost, is_number_text, normalize_text, set_value, step_text, text_value, value,
    wheel_step,
};
use rat_wheel_input::{EditableText, Number, NumberError, NumberRange, WheelDirection};

#[derive(Debug, Default)]
struct Field {
    text: String,
    cursor: upos_type,
}

impl Field {
    fn new(text: &str, cursor: upos_type) -> Self {
        Self {
            text: text.to_string(),
            cursor,
        }
    }
}

impl EditableText for Field {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.text.len() as upos_type;
    }

    fn cursor(&self) -> upos_type {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: upos_type) {
        self.cursor = cursor;
    }
}

fn step(text: &str, cursor: upos_type, direction: WheelDirection) -> Option<String> {
    step_text(text, cursor, &NumberRange::default(), direction)
}

#[test]
fn test_pattern() {
    for t in ["", "-", ".", "-.", "0", "-12", "12.", "12.50", "-.5", ".5"] {
        assert!(is_number_text(t), "{:?}", t);
    }
    for t in ["a", "--1", "1-", "1.2.3", "+1", " 1", "1e5", "1,5", "-1.-"] {
        assert!(!is_number_text(t), "{:?}", t);
    }
}

#[test]
fn test_text_value() {
    assert_eq!(text_value(""), 0.0);
    assert_eq!(text_value("-"), 0.0);
    assert_eq!(text_value("."), 0.0);
    assert_eq!(text_value("-."), 0.0);
    assert_eq!(text_value("3."), 3.0);
    assert_eq!(text_value(".5"), 0.5);
    assert_eq!(text_value("-.25"), -0.25);
    assert_eq!(text_value("-12"), -12.0);
    assert_eq!(text_value("0012.50"), 12.5);
    assert_eq!(text_value("abc"), 0.0);
}

#[test]
fn test_normalize() {
    assert_eq!(normalize_text("3."), Some("3.0".to_string()));
    assert_eq!(normalize_text("-"), Some("0".to_string()));
    assert_eq!(normalize_text("-."), Some("-0.0".to_string()));
    assert_eq!(normalize_text("."), Some(".0".to_string()));
    assert_eq!(normalize_text("-3."), Some("-3.0".to_string()));
    assert_eq!(normalize_text(""), None);
    assert_eq!(normalize_text("3"), None);
    assert_eq!(normalize_text("3.5"), None);
    assert_eq!(normalize_text("-.5"), None);
    // only reachable with set_text
    assert_eq!(normalize_text("x."), Some("0".to_string()));
}

#[test]
fn test_focus_lost() {
    let mut f = Field::new("3.", 2);
    assert!(focus_lost(&mut f));
    assert_eq!(f.text(), "3.0");

    let mut f = Field::new("-", 1);
    assert!(focus_lost(&mut f));
    assert_eq!(f.text(), "0");

    let mut f = Field::new("-.", 2);
    assert!(focus_lost(&mut f));
    assert_eq!(f.text(), "-0.0");

    let mut f = Field::new("", 0);
    assert!(!focus_lost(&mut f));
    assert_eq!(f.text(), "");

    let mut f = Field::new("42", 1);
    assert!(!focus_lost(&mut f));
    assert_eq!(f.text(), "42");
    assert_eq!(f.cursor(), 1);
}

#[test]
fn test_step_integer() {
    assert_eq!(step("10", 2, WheelDirection::Up), Some("11".to_string()));
    assert_eq!(step("10", 2, WheelDirection::Down), Some("9".to_string()));
    assert_eq!(step("10", 1, WheelDirection::Up), Some("20".to_string()));
    assert_eq!(step("0", 1, WheelDirection::Down), Some("-1".to_string()));
    assert_eq!(step("-10", 3, WheelDirection::Up), Some("-9".to_string()));
    assert_eq!(step("-10", 2, WheelDirection::Down), Some("-20".to_string()));
    // cursor at the start uses the first digit, but one place further left.
    assert_eq!(step("10", 0, WheelDirection::Up), Some("110".to_string()));
    // beyond i64
    assert_eq!(
        step("12345678901234567890", 20, WheelDirection::Up),
        Some("12345678901234567891".to_string())
    );
    assert_eq!(
        step("9223372036854775807", 19, WheelDirection::Up),
        Some("9223372036854775808".to_string())
    );
}

#[test]
fn test_step_decimal() {
    assert_eq!(step("1.5", 1, WheelDirection::Up), Some("2.5".to_string()));
    assert_eq!(step("1.5", 2, WheelDirection::Up), Some("2.5".to_string()));
    assert_eq!(step("1.5", 3, WheelDirection::Up), Some("1.6".to_string()));
    assert_eq!(step("1.25", 4, WheelDirection::Down), Some("1.24".to_string()));
    assert_eq!(step("0.7", 3, WheelDirection::Up), Some("0.8".to_string()));
    assert_eq!(step("9.9", 1, WheelDirection::Up), Some("10.9".to_string()));
    assert_eq!(step("12.34", 1, WheelDirection::Up), Some("22.34".to_string()));
    assert_eq!(step("0.05", 4, WheelDirection::Down), Some("0.04".to_string()));
    assert_eq!(step("3.", 2, WheelDirection::Up), Some("4".to_string()));
    assert_eq!(step(".5", 2, WheelDirection::Up), Some("0.6".to_string()));
}

#[test]
fn test_step_noop() {
    assert_eq!(step("", 0, WheelDirection::Up), None);
    assert_eq!(step("-", 1, WheelDirection::Up), None);
    assert_eq!(step("-5", 0, WheelDirection::Up), None);
    assert_eq!(step(".", 1, WheelDirection::Up), None);
    assert_eq!(step("-.", 2, WheelDirection::Up), None);
    assert_eq!(step("12", 5, WheelDirection::Up), None);
    assert_eq!(
        step("170141183460469231731687303715884105727", 39, WheelDirection::Up),
        None
    );
}

#[test]
fn test_step_clamp() {
    let range = NumberRange::new(0.0, 2.0);
    assert_eq!(
        step_text("1.5", 1, &range, WheelDirection::Up),
        Some("2.0".to_string())
    );
    assert_eq!(
        step_text("1.55", 1, &range, WheelDirection::Down),
        Some("0.55".to_string())
    );
    assert_eq!(
        step_text("0.55", 1, &range, WheelDirection::Down),
        Some("0.00".to_string())
    );

    // integer text clamped to a bound prints the bound as float.
    let range = NumberRange::new(-3.5, 5.0);
    assert_eq!(
        step_text("4", 0, &range, WheelDirection::Up),
        Some("5.0".to_string())
    );
    assert_eq!(
        step_text("-3", 2, &range, WheelDirection::Down),
        Some("-3.5".to_string())
    );
    assert_eq!(
        step_text("3", 1, &range, WheelDirection::Up),
        Some("4".to_string())
    );
}

#[test]
fn test_wheel_step() {
    let range = NumberRange::default();

    let mut f = Field::new("10", 2);
    assert!(wheel_step(&mut f, &range, WheelDirection::Up));
    assert_eq!(f.text(), "11");
    assert_eq!(f.cursor(), 2);

    let mut f = Field::new("100", 1);
    assert!(wheel_step(&mut f, &range, WheelDirection::Down));
    assert_eq!(f.text(), "0");
    assert_eq!(f.cursor(), 1);

    let mut f = Field::new("-10", 3);
    assert!(wheel_step(&mut f, &range, WheelDirection::Up));
    assert_eq!(f.text(), "-9");
    assert_eq!(f.cursor(), 2);

    let mut f = Field::new("-5", 0);
    assert!(!wheel_step(&mut f, &range, WheelDirection::Up));
    assert_eq!(f.text(), "-5");
    assert_eq!(f.cursor(), 0);

    let range = NumberRange::new(0.0, 1.0);
    let mut f = Field::new("1.0", 1);
    assert!(!wheel_step(&mut f, &range, WheelDirection::Up));
    assert_eq!(f.text(), "1.0");
    assert_eq!(f.cursor(), 1);
}

#[test]
fn test_value() {
    let mut f = Field::default();
    assert_eq!(value(&f), 0.0);

    set_value(&mut f, 5);
    assert_eq!(f.text(), "5");
    set_value(&mut f, 5.0);
    assert_eq!(f.text(), "5.0");
    set_value(&mut f, -0.25f64);
    assert_eq!(f.text(), "-0.25");
    assert_eq!(value(&f), -0.25);
    set_value(&mut f, 7u8);
    assert_eq!(value(&f), 7.0);
}

#[test]
fn test_range() {
    let r = NumberRange::new(5.0, 1.0);
    assert_eq!(r.minimum(), 1.0);
    assert_eq!(r.maximum(), 5.0);
    assert!(r.is_bounded());
    assert!(r.contains(1.0));
    assert!(r.contains(5.0));
    assert!(!r.contains(5.5));

    assert_eq!(r.clamp(Number::Int(3)), Number::Int(3));
    assert_eq!(r.clamp(Number::Int(7)), Number::Float(5.0));
    assert_eq!(r.clamp(Number::Float(0.5)), Number::Float(1.0));

    let mut r = r;
    r.clear();
    assert!(!r.is_bounded());
    assert_eq!(r, NumberRange::unbounded());
    assert_eq!(r.clamp(Number::Int(i128::MAX)), Number::Int(i128::MAX));
}

#[test]
fn test_number() -> Result<(), anyhow::Error> {
    assert_eq!("12".parse::<Number>()?, Number::Int(12));
    assert_eq!("-12".parse::<Number>()?, Number::Int(-12));
    assert_eq!("1.5".parse::<Number>()?, Number::Float(1.5));
    assert_eq!("3.".parse::<Number>()?, Number::Float(3.0));
    assert_eq!(
        "abc".parse::<Number>(),
        Err(NumberError::NotANumber("abc".to_string()))
    );

    assert_eq!(Number::Int(5).to_string(), "5");
    assert_eq!(Number::Float(5.0).to_string(), "5.0");
    assert_eq!(Number::Float(0.1).to_string(), "0.1");
    assert_eq!(Number::Float(-0.0).to_string(), "-0.0");
    assert_eq!(Number::Float(1e16).to_string(), "10000000000000000.0");
    assert_eq!(Number::Float(0.00001).to_string(), "0.00001");
    assert!(is_number_text(&Number::Float(1e-7).to_string()));
    assert_eq!(Number::from(u64::MAX), Number::Int(18446744073709551615));
    assert_eq!(Number::from(-3i32), Number::Int(-3));
    assert_eq!(Number::from(2.5f32), Number::Float(2.5));
    Ok(())
}
