use crate::vectors::Vector;
use std::fmt;

const PREVIEW: usize = 4;

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shown = &self.data[..self.len().min(PREVIEW)];
        write!(f, "Vector(len: {}, head: {:?}", self.len(), shown)?;
        if self.len() > PREVIEW {
            write!(f, " ..")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_short() {
        let v = Vector::from(vec![1., 2.]);
        assert_eq!("Vector(len: 2, head: [1.0, 2.0])", format!("{:?}", v));
    }

    #[test]
    fn test_debug_long() {
        let mut v = Vector::zeros(10);
        v.fill_ramp(0);
        assert_eq!(
            "Vector(len: 10, head: [0.0, 1.0, 2.0, 3.0] ..)",
            format!("{:?}", v)
        );
    }
}
