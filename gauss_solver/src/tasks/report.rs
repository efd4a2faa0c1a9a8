use std::io::{self, Write};

use super::solve::Solution;

// mirrors printf's "% 2.1f": a space in place of the plus sign, one decimal
pub fn format_value(value: f64) -> String {
    let sign = if value.is_sign_negative() && !value.is_nan() {
        '-'
    } else {
        ' '
    };
    let magnitude = value.abs();
    if magnitude.is_nan() {
        format!("{sign}nan")
    } else if magnitude.is_infinite() {
        format!("{sign}inf")
    } else {
        format!("{sign}{magnitude:.1}")
    }
}

pub fn header(task_number: usize, solution: &Solution) -> String {
    format!("Task {task_number}: {}", solution.mode)
}

pub fn write_report<W: Write>(
    out: &mut W,
    task_number: usize,
    solution: &Solution,
) -> io::Result<()> {
    writeln!(out, "{}", header(task_number, solution))?;
    for (idx, value) in solution.values.iter().enumerate() {
        writeln!(out, "x{}= {}", idx + 1, format_value(*value))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod test {
    use crate::elimination::{PermutationHistory, PivotMode};

    use super::*;

    #[test]
    fn format_like_printf_space_flag() {
        assert_eq!(format_value(1.0), " 1.0");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(0.04), " 0.0");
        assert_eq!(format_value(12.96), " 13.0");
        assert_eq!(format_value(f64::INFINITY), " inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_value(f64::NAN), " nan");
    }

    #[test]
    fn write_header_values_and_blank_line() {
        let solution = Solution {
            mode: PivotMode::RowPivot,
            values: vec![1.0, -2.5],
            history: PermutationHistory::identity(2),
        };
        let mut out = Vec::new();
        write_report(&mut out, 2, &solution).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Task 2: row pivoting\nx1=  1.0\nx2= -2.5\n\n"
        );
    }
}
