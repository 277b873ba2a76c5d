#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Pass(String),
    Warn(String),
    Fail(String),
}

impl CheckOutcome {
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckOutcome::Fail(_))
    }

    fn line(&self) -> String {
        match self {
            CheckOutcome::Pass(msg) => format!("   ✅ {}", msg),
            CheckOutcome::Warn(msg) => format!("   ⚠️  {}", msg),
            CheckOutcome::Fail(msg) => format!("   ❌ {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckSection {
    pub title: &'static str,
    pub checks: Vec<CheckOutcome>,
}

impl CheckSection {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            checks: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.checks.push(outcome);
    }

    pub fn passed(&self) -> bool {
        !self.checks.iter().any(CheckOutcome::is_fail)
    }

    pub fn print(&self) {
        println!("\n{}", self.title);
        for check in &self.checks {
            println!("{}", check.line());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupReport {
    pub sections: Vec<CheckSection>,
}

impl SetupReport {
    pub fn add(&mut self, section: CheckSection) {
        self.sections.push(section);
    }

    // ready to deploy only when no check failed, warnings are fine
    pub fn all_good(&self) -> bool {
        self.sections.iter().all(CheckSection::passed)
    }
}
