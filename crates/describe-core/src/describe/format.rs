//! Literal formatting helpers
//!
//! Floats print in the shortest form that round-trips, switching to
//! exponent notation when the decimal exponent is below -4 or at least 6
//! (`1e+06`, `1.5e-07`).

/// Exponent at which plain decimal notation gives way to `e` notation
const EXPONENT_THRESHOLD: i32 = 6;

/// Build the indentation prefix for `level`
pub fn indent(unit: &str, level: usize) -> String {
    unit.repeat(level)
}

/// Format a 64-bit float
pub fn format_f64(v: f64) -> String {
    if let Some(special) = special_float(v) {
        return special.to_string();
    }
    shortest_g(&format!("{:e}", v))
}

/// Format a 32-bit float using its own shortest digits
pub fn format_f32(v: f32) -> String {
    if let Some(special) = special_float(f64::from(v)) {
        return special.to_string();
    }
    shortest_g(&format!("{:e}", v))
}

/// Format a complex number: `re` alone when the imaginary part is zero
pub fn format_complex(re: String, im: String, im_is_zero: bool) -> String {
    if im_is_zero {
        re
    } else {
        format!("{}+{}i", re, im)
    }
}

fn special_float(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v == f64::INFINITY {
        Some("+Inf")
    } else if v == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

/// Rewrite Rust's shortest `{:e}` output (`-1.2345e3`) into `%g` layout
fn shortest_g(sci: &str) -> String {
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci, 0),
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if exp < -4 || exp >= EXPONENT_THRESHOLD {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        // exp is in 0..EXPONENT_THRESHOLD here
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}
