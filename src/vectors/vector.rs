use std::ops::{Index, IndexMut};

/// Owned, contiguous run of `f32` whose length is fixed when it is built.
#[derive(Clone, PartialEq)]
pub struct Vector {
    pub data: Box<[f32]>,
}

impl Vector {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Overwrites every element in place, keeping the allocation.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize) -> f32) {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = f(i);
        }
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mut() {
        let mut v = Vector::from(vec![1., 2., 3.]);
        v[1] = 5.;
        assert_eq!(&[1., 5., 3.], v.as_slice());
        assert_eq!(3, v.len());
    }

    #[test]
    fn test_fill_with() {
        let mut v = Vector::from(vec![9.; 3]);
        v.fill_with(|i| (i * 2) as f32);
        assert_eq!(&[0., 2., 4.], v.as_slice());
    }

    #[test]
    fn test_empty() {
        let v = Vector::from(Vec::new());
        assert_eq!(0, v.len());
        assert_eq!(0, v.as_slice().len());
    }
}
