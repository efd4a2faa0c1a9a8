use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use strum::IntoEnumIterator;

use crate::elimination::PivotMode;

use super::report::write_report;
use super::solve::{run, Solution};

pub struct Task {
    pub number: usize,
    pub mode: PivotMode,
    pub input: PathBuf,
}

impl Task {
    pub fn run(&self) -> Result<Solution> {
        run(self.mode, &self.input).with_context(|| format!("task {}", self.number))
    }
}

pub struct TaskPlan {
    tasks: Vec<Task>,
}

impl TaskPlan {
    /// One task per pivoting mode, reading `plik1.csv` .. `plik4.csv` from `data_dir`.
    pub fn standard(data_dir: &Path) -> Self {
        let tasks = PivotMode::iter()
            .enumerate()
            .map(|(idx, mode)| Task {
                number: idx + 1,
                mode,
                input: data_dir.join(format!("plik{}.csv", idx + 1)),
            })
            .collect();
        Self { tasks }
    }

    pub fn single(mode: PivotMode, input: PathBuf) -> Self {
        Self {
            tasks: vec![Task {
                number: 1,
                mode,
                input,
            }],
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    // tasks run in order; the first one that fails stops the plan
    pub fn run_all<W: Write>(&self, out: &mut W) -> Result<()> {
        for task in self.tasks.iter() {
            let solution = task.run()?;
            write_report(out, task.number, &solution).context("writing report")?;
        }
        Ok(())
    }
}
