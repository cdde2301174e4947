use crate::loss::LossFunction;

/// Huber loss for regression: squared within `c` of the target, linear outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuberLoss {
    pub c: f64,
}

impl HuberLoss {
    pub fn new(c: f64) -> Self {
        HuberLoss { c }
    }
}

impl LossFunction for HuberLoss {
    /// With r = p − y:  −r if |r| ≤ c,  −c if r > c,  c if r < −c
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        let r = p - y;
        if r.abs() <= self.c {
            -r
        } else if r > self.c {
            -self.c
        } else {
            self.c
        }
    }

    /// ½r²  if |r| ≤ c,  c·|r| − ½c²  otherwise
    fn loss(&self, p: f64, y: f64) -> f64 {
        let r = p - y;
        if r.abs() <= self.c {
            0.5 * r * r
        } else {
            self.c * r.abs() - 0.5 * self.c * self.c
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_region_returns_negative_residual() {
        let huber = HuberLoss::new(1.0);
        assert_eq!(huber.get_update(2.5, 2.0), -0.5);
        assert_eq!(huber.get_update(3.0, 2.0), -1.0);
        assert_eq!(huber.get_update(1.0, 2.0), 1.0);
    }

    #[test]
    fn linear_region_is_clipped() {
        let huber = HuberLoss::new(0.5);
        assert_eq!(huber.get_update(10.0, 0.0), -0.5);
        assert_eq!(huber.get_update(-10.0, 0.0), 0.5);
        assert_eq!(huber.loss(10.0, 0.0), 5.0 - 0.125);
    }
}
