use std::cmp::Ordering;

/// How full the cart is relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Under,
    Complete,
    Over,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub len: usize,
    pub target: usize,
    /// `100 * len / target`, may exceed 100.
    pub percent: f64,
    pub fill: Fill,
}

impl Progress {
    pub fn new(len: usize, target: usize) -> Self {
        let percent = if target == 0 {
            0.0
        } else {
            100.0 * len as f64 / target as f64
        };
        let fill = match len.cmp(&target) {
            Ordering::Less => Fill::Under,
            Ordering::Equal => Fill::Complete,
            Ordering::Greater => Fill::Over,
        };
        Self {
            len,
            target,
            percent,
            fill,
        }
    }

    pub fn hint(&self) -> String {
        match self.fill {
            Fill::Under => format!("Add {} more domain(s)", self.target - self.len),
            Fill::Complete => "Ready to purchase!".to_string(),
            Fill::Over => format!("Remove {} domain(s)", self.len - self.target),
        }
    }
}
