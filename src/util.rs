use hashbrown::HashMap;

fn sign(x: f32) -> f32 {
    if x.is_sign_negative() {
        -1.0
    } else {
        1.0
    }
}

lazy_static! {
    /// Built-in functions, by name. Filled once and never written again.
    pub static ref FUNCTIONS: HashMap<&'static str, fn(f32) -> f32> = {
        let mut map = HashMap::<&'static str, fn(f32) -> f32>::new();
        map.insert("sin", libm::sinf);
        map.insert("cos", libm::cosf);
        map.insert("tan", libm::tanf);
        map.insert("asin", libm::asinf);
        map.insert("acos", libm::acosf);
        map.insert("atan", libm::atanf);
        map.insert("sqrt", libm::sqrtf);
        map.insert("exp", libm::expf);
        map.insert("log", libm::logf);
        map.insert("abs", libm::fabsf);
        map.insert("ceil", libm::ceilf);
        map.insert("floor", libm::floorf);
        map.insert("sign", sign);
        map.shrink_to_fit();
        map
    };
}

#[cfg(test)]
mod tests {
    use super::FUNCTIONS;
    use test_case::test_case;

    #[test_case("sqrt", 16.0 => 4.0 ; "square root")]
    #[test_case("sin", 0.0 => 0.0 ; "sine")]
    #[test_case("cos", 0.0 => 1.0 ; "cosine")]
    #[test_case("abs", -5.0 => 5.0 ; "absolute value")]
    #[test_case("ceil", 1.2 => 2.0 ; "ceiling")]
    #[test_case("floor", -1.2 => -2.0 ; "floor")]
    #[test_case("exp", 0.0 => 1.0 ; "exponential")]
    #[test_case("log", 1.0 => 0.0 ; "natural logarithm")]
    #[test_case("sign", -3.0 => -1.0 ; "negative sign")]
    #[test_case("sign", 0.0 => 1.0 ; "positive zero")]
    #[test_case("sign", -0.0 => -1.0 ; "negative zero")]
    fn call(name: &str, x: f32) -> f32 {
        FUNCTIONS[name](x)
    }

    #[test]
    fn table() {
        assert_eq!(FUNCTIONS.len(), 13);
        assert!(FUNCTIONS.get("ln").is_none());
        assert!(FUNCTIONS["asin"](2.0).is_nan());
    }
}
