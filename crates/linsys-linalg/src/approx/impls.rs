use super::ApproxEq;

impl ApproxEq for f64 {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= tolerance
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let abs_diff = (self - other).abs();
        let largest = f64::max(self.abs(), other.abs());

        abs_diff <= largest * tolerance
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    fn abs_diff_eq(&self, other: &U, tolerance: f64) -> bool {
        T::abs_diff_eq(self, other, tolerance)
    }

    fn rel_diff_eq(&self, other: &U, tolerance: f64) -> bool {
        T::rel_diff_eq(self, other, tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<Vec<U>> for Vec<T> {
    fn abs_diff_eq(&self, other: &Vec<U>, tolerance: f64) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Vec<U>, tolerance: f64) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), tolerance)
    }
}
