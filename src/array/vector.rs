use crate::prelude::*;

impl<NUM> Array for [[NUM; 3]]
where
    NUM: Numeric,
{
    fn length(&self) -> usize {
        self.len()
    }

    fn components(&self) -> usize {
        3
    }

    fn precision(&self) -> Precision {
        NUM::PRECISION
    }

    fn ascii_body(&self, digits: Option<usize>) -> String {
        let mut data = String::new();

        for [x, y, z] in self {
            data.push_str(&x.format_ascii(digits));
            data.push(' ');
            data.push_str(&y.format_ascii(digits));
            data.push(' ');
            data.push_str(&z.format_ascii(digits));
            data.push('\n');
        }

        data
    }

    fn extend_le_bytes(&self, bytes: &mut Vec<u8>) {
        for vector in self {
            vector
                .iter()
                .for_each(|value| Numeric::extend_le_bytes(value, bytes));
        }
    }
}

#[test]
fn ascii_vectors_space_joined() {
    let values = [[0.0f64, 1.0, 2.5], [3.0, 4.0, 5.0]];
    assert_eq!(
        values.as_slice().ascii_body(None),
        "0.0 1.0 2.5\n3.0 4.0 5.0\n"
    );
}
