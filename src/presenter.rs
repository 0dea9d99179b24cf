//! UI collaborator seam
//!
//! The scoring core never talks to a terminal directly. A `Presenter` asks
//! the questions and renders the result; `run_questionnaire` drives it.

use crate::config::{AdvisorConfig, OutputFormat};
use crate::engine::{self, Contribution};
use crate::error::{AdvisorError, Result};
use crate::formatter::{self, DisplayState};
use crate::questions::{questionnaire, Question};
use crate::render::{render_breakdown, render_text, RenderOptions};
use crate::report::AdvisorReport;
use crate::types::{option_matches, Answers, ScorePair};
use std::io::{BufRead, Write};

/// Something that can ask a question and show a result
pub trait Presenter {
    /// Return the zero-based index of the chosen option
    fn present_choice(&mut self, question: &Question) -> Result<usize>;

    fn render_result(&mut self, state: &DisplayState) -> Result<()>;
}

/// Everything produced by one pass through the questionnaire
#[derive(Debug, Clone)]
pub struct Outcome {
    pub answers: Answers,
    pub scores: ScorePair,
    pub breakdown: Vec<Contribution>,
    pub display: DisplayState,
}

/// Ask all five questions, score the answers and render the result
pub fn run_questionnaire<P: Presenter>(presenter: &mut P) -> Result<Outcome> {
    let mut indices = [0usize; 5];
    for (slot, question) in indices.iter_mut().zip(questionnaire()) {
        let index = presenter.present_choice(&question)?;
        if index >= question.options.len() {
            return Err(AdvisorError::ChoiceOutOfRange {
                question: question.id,
                index,
                count: question.options.len(),
            });
        }
        tracing::debug!(question = %question.id, choice = index, "answer captured");
        *slot = index;
    }

    let answers = Answers::from_indices(indices)?;
    let scores = engine::score(&answers);
    let display = formatter::format(scores);
    presenter.render_result(&display)?;

    Ok(Outcome {
        answers,
        breakdown: engine::breakdown(&answers),
        scores,
        display,
    })
}

/// Line-oriented presenter over any reader/writer pair
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    options: RenderOptions,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W, options: RenderOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the per-question score table after a result
    pub fn show_breakdown(&mut self, contributions: &[Contribution]) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_breakdown(contributions))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AdvisorError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Match a typed reply against a question: a 1-based number, a key or a label
fn resolve_reply(question: &Question, reply: &str) -> Option<usize> {
    if let Ok(n) = reply.parse::<usize>() {
        return (1..=question.options.len()).contains(&n).then(|| n - 1);
    }
    question
        .options
        .iter()
        .position(|o| option_matches(&o.key, &o.label, reply))
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn present_choice(&mut self, question: &Question) -> Result<usize> {
        writeln!(self.output, "Question {}: {}", question.number, question.heading)?;
        writeln!(self.output, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, option.label)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let reply = self.read_line()?;
            if reply.is_empty() {
                continue;
            }
            match resolve_reply(question, &reply) {
                Some(index) => {
                    writeln!(self.output)?;
                    return Ok(index);
                }
                None => writeln!(
                    self.output,
                    "Please enter 1-{} or one of the options above.",
                    question.options.len()
                )?,
            }
        }
    }

    fn render_result(&mut self, state: &DisplayState) -> Result<()> {
        write!(self.output, "{}", render_text(state, &self.options))?;
        self.output.flush()?;
        Ok(())
    }
}

/// One interactive session. Prompts, the text result and the optional
/// breakdown go to `prompts`. In JSON mode the report is the only thing
/// written to `results`, so that stream stays machine-readable.
pub fn run_session<R, W, J>(
    input: R,
    prompts: W,
    mut results: J,
    config: &AdvisorConfig,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    J: Write,
{
    let mut presenter = TerminalPresenter::new(input, prompts, config.render_options());
    writeln!(presenter.output, "Database Selection Assistant")?;
    writeln!(presenter.output, "============================")?;
    writeln!(
        presenter.output,
        "Answer these 5 questions to determine whether PostgreSQL with TimescaleDB \
         or ClickHouse is better for your use case.\n"
    )?;

    let outcome = run_questionnaire(&mut presenter)?;
    if config.explain {
        presenter.show_breakdown(&outcome.breakdown)?;
    }

    if config.output == OutputFormat::Json {
        let report = AdvisorReport::from_parts(
            outcome.answers,
            outcome.scores,
            outcome.display.clone(),
        )?;
        writeln!(results, "{}", report.to_json_pretty()?)?;
        results.flush()?;
    }
    Ok(outcome)
}
