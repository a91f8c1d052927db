use crate::vectors::Vector;

impl Vector {
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.; len].into_boxed_slice(),
        }
    }

    /// Element `i` becomes `i + offset` as a float.
    pub fn fill_ramp(&mut self, offset: usize) {
        self.fill_with(|i| (i + offset) as f32);
    }
}
