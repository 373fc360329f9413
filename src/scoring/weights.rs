/// Fixed category weights for the weighted-categories strategy.
/// A matched category contributes weight x 100 to the composite score,
/// so the score is always a subset-sum of {40, 30, 20, 10}.
pub const CATEGORY_WEIGHTS: Weights = Weights {
    skills: 0.4,
    experience: 0.3,
    education: 0.2,
    keywords: 0.1,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.keywords
    }
}
