use std::fmt;

/// One candidate resource: a program for `ensemble` at the `year` clinic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Job {
    pub year: u32,
    pub ensemble: String,
}

impl Job {
    pub fn new(year: u32, ensemble: impl Into<String>) -> Self {
        Self {
            year,
            ensemble: ensemble.into(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.ensemble)
    }
}

/// Expands years x ensembles into jobs, year-major, preserving input order.
pub fn plan_jobs(years: &[u32], ensembles: &[String]) -> Vec<Job> {
    let mut jobs = Vec::with_capacity(years.len() * ensembles.len());
    for &year in years {
        for ensemble in ensembles {
            jobs.push(Job::new(year, ensemble.as_str()));
        }
    }
    jobs
}
