//! Implements PresenterPort. Fixed-format text lines on any writer.
//!
//! With color on, status lines get ANSI emphasis via crossterm; the text is identical either way.

use crate::domain::{DomainError, EnrollmentOutcome, OfferingReport, Student};
use crate::ports::PresenterPort;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};
use std::sync::Mutex;

const SUCCESS: Color = Color::Green;
const WARNING: Color = Color::Yellow;
const TITLE: Color = Color::Cyan;

/// Console adapter. Owns its writer (stdout in the binary, a buffer in tests).
pub struct ConsolePresenter<W: Write + Send> {
    out: Mutex<W>,
    color: bool,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    /// Give back the writer, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn with_out<F>(&self, f: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut W, bool) -> io::Result<()>,
    {
        let mut out = self
            .out
            .lock()
            .map_err(|e| DomainError::Output(format!("console lock poisoned: {}", e)))?;
        f(&mut *out, self.color)?;
        out.flush()?;
        Ok(())
    }
}

fn emphasized(out: &mut impl Write, color: Option<Color>, line: &str) -> io::Result<()> {
    match color {
        Some(c) => queue!(out, SetForegroundColor(c), Print(line), ResetColor)?,
        None => out.write_all(line.as_bytes())?,
    }
    out.write_all(b"\n")
}

fn write_enrollment(
    out: &mut impl Write,
    color: bool,
    offering: &str,
    student: &Student,
    outcome: EnrollmentOutcome,
) -> io::Result<()> {
    let (tint, line) = match outcome {
        EnrollmentOutcome::Enrolled => (
            SUCCESS,
            format!(
                "✅ Aluno {} matriculado com sucesso na formação \"{}\"!",
                student.name, offering
            ),
        ),
        EnrollmentOutcome::AlreadyEnrolled => (
            WARNING,
            format!(
                "⚠️ O aluno {} já está matriculado na formação \"{}\".",
                student.name, offering
            ),
        ),
    };
    emphasized(out, color.then_some(tint), &line)
}

fn write_report(out: &mut impl Write, color: bool, report: &OfferingReport) -> io::Result<()> {
    writeln!(out)?;
    emphasized(
        out,
        color.then_some(TITLE),
        &format!("📘 Formação: {}", report.name),
    )?;
    writeln!(out, "Nível: {}", report.level)?;

    writeln!(out)?;
    writeln!(out, "Conteúdos:")?;
    for item in &report.content_items {
        writeln!(out, "- {} ({} min)", item.name, item.duration_minutes)?;
    }
    writeln!(
        out,
        "⏱️ Duração total: {} minutos",
        report.total_duration_minutes
    )?;

    writeln!(out)?;
    writeln!(out, "Alunos matriculados:")?;
    if report.enrolled_students.is_empty() {
        writeln!(out, "Nenhum aluno matriculado ainda.")?;
    } else {
        for student in &report.enrolled_students {
            writeln!(out, "- {}", student.name)?;
        }
    }
    Ok(())
}

impl<W: Write + Send> PresenterPort for ConsolePresenter<W> {
    fn enrollment(
        &self,
        offering: &str,
        student: &Student,
        outcome: EnrollmentOutcome,
    ) -> Result<(), DomainError> {
        self.with_out(|out, color| write_enrollment(out, color, offering, student, outcome))
    }

    fn report(&self, report: &OfferingReport) -> Result<(), DomainError> {
        self.with_out(|out, color| write_report(out, color, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentItem, Level};

    fn render<F>(color: bool, f: F) -> String
    where
        F: FnOnce(&ConsolePresenter<Vec<u8>>),
    {
        let presenter = ConsolePresenter::new(Vec::new(), color);
        f(&presenter);
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    fn report(students: Vec<Student>) -> OfferingReport {
        OfferingReport {
            name: "Formação Kotlin Developer".into(),
            level: Level::Intermediate,
            content_items: vec![
                ContentItem::new("Introdução ao Kotlin", 90),
                ContentItem::new("Orientação a Objetos com Kotlin", 120),
                ContentItem::new("Coleções e Funções de Extensão", 100),
            ],
            total_duration_minutes: 310,
            enrolled_students: students,
        }
    }

    #[test]
    fn test_enrollment_lines() {
        let text = render(false, |p| {
            let maria = Student::new("Maria Silva");
            p.enrollment("Formação Kotlin Developer", &maria, EnrollmentOutcome::Enrolled)
                .unwrap();
            p.enrollment(
                "Formação Kotlin Developer",
                &maria,
                EnrollmentOutcome::AlreadyEnrolled,
            )
            .unwrap();
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "✅ Aluno Maria Silva matriculado com sucesso na formação \"Formação Kotlin Developer\"!",
                "⚠️ O aluno Maria Silva já está matriculado na formação \"Formação Kotlin Developer\".",
            ]
        );
    }

    #[test]
    fn test_report_layout() {
        let text = render(false, |p| {
            p.report(&report(vec![Student::new("Ana Souza")])).unwrap()
        });

        let expected = "\n📘 Formação: Formação Kotlin Developer\n\
                        Nível: INTERMEDIARIO\n\
                        \n\
                        Conteúdos:\n\
                        - Introdução ao Kotlin (90 min)\n\
                        - Orientação a Objetos com Kotlin (120 min)\n\
                        - Coleções e Funções de Extensão (100 min)\n\
                        ⏱️ Duração total: 310 minutos\n\
                        \n\
                        Alunos matriculados:\n\
                        - Ana Souza\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_without_students() {
        let text = render(false, |p| p.report(&report(Vec::new())).unwrap());

        assert!(text.ends_with("Alunos matriculados:\nNenhum aluno matriculado ainda.\n"));
        assert!(!text.contains("\n- Ana"));
    }

    #[test]
    fn test_color_wraps_status_lines() {
        let plain = render(false, |p| {
            p.enrollment("X", &Student::new("Ana"), EnrollmentOutcome::Enrolled)
                .unwrap()
        });
        let colored = render(true, |p| {
            p.enrollment("X", &Student::new("Ana"), EnrollmentOutcome::Enrolled)
                .unwrap()
        });

        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains(plain.trim_end()));
        assert!(!plain.contains('\u{1b}'));
    }
}
