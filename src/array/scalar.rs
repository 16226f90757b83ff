use crate::prelude::*;

impl Numeric for f64 {
    const PRECISION: Precision = Precision::Float64;

    fn format_ascii(&self, digits: Option<usize>) -> String {
        match digits {
            Some(digits) => crate::utils::format_significant(*self, digits),
            None => {
                let mut buffer = ryu::Buffer::new();
                buffer.format(*self).to_string()
            }
        }
    }
}

impl Numeric for i64 {
    const PRECISION: Precision = Precision::Int64;

    fn format_ascii(&self, _digits: Option<usize>) -> String {
        self.to_string()
    }
}

macro_rules! scalar_array {
    ($num:ty) => {
        impl Array for [$num] {
            fn length(&self) -> usize {
                self.len()
            }

            fn precision(&self) -> Precision {
                <$num as Numeric>::PRECISION
            }

            fn ascii_body(&self, digits: Option<usize>) -> String {
                let mut data = String::new();

                for value in self {
                    data.push_str(&value.format_ascii(digits));
                    data.push('\n');
                }

                data
            }

            fn extend_le_bytes(&self, bytes: &mut Vec<u8>) {
                self.iter()
                    .for_each(|value| Numeric::extend_le_bytes(value, bytes));
            }
        }
    };
}

scalar_array!(f64);
scalar_array!(i64);

#[test]
fn ascii_one_value_per_line() {
    let values = [1.5f64, -2.0, 0.1];
    assert_eq!(values.as_slice().ascii_body(None), "1.5\n-2.0\n0.1\n");
}

#[test]
fn ascii_significant_digits() {
    let values = [1.0f64 / 3.0, 2.0, 1.5e-9, 123456789.0];
    assert_eq!(
        values.as_slice().ascii_body(Some(3)),
        "0.333\n2\n1.5e-9\n1.23e8\n"
    );
}

#[test]
fn ascii_integers_ignore_precision() {
    let values = [3i64, -4, 12];
    assert_eq!(values.as_slice().ascii_body(Some(3)), "3\n-4\n12\n");
}
