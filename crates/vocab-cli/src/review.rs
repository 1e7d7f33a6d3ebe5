//! Interactive review loop.
//!
//! Each input line is parsed into a [`ReviewCommand`], applied to the
//! session, and followed by a redraw of the current word and match status.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info};
use vocab_model::{ExclusionSet, FilterConfig, WordState};
use vocab_review::{Direction, MatchStatus, ReviewError, Session};
use vocab_store::{SessionFile, StoreError, load_exclusion_words, save_session};

use crate::settings::list_name;
use crate::summary::progress_table;

pub const HELP: &str = "\
Commands:
  k [WORD]            mark the current word (or WORD) as known
  x [WORD]            mark the current word (or WORD) as unknown
  u WORD              mark WORD as unseen again
  selection [STATE]   list the words marked so far (known, unknown or seen)
  /TEXT               search for TEXT (\"/\" alone clears the search)
  n, p                next / previous match
  filter KEY=VALUE..  set filter values: letters, occurrences, capital (on/off)
  filters on|off      switch the filter on or off
  exclude NAME PATH [STATE]
                      hide the words listed in PATH; a saved session (.json)
                      contributes its seen words, or only those in STATE;
                      NAME \"-\" names the list after the file
  disable NAME        stop hiding the words of list NAME for now
  enable NAME         hide the words of list NAME again
  include NAME        remove list NAME from the filter
  progress            show progress
  save                save the session
  quit                leave (quit! leaves without saving)
  help                show this help";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    /// Classify the current word, or the named one.
    Classify {
        state: WordState,
        word: Option<String>,
    },
    Selection(Vec<WordState>),
    Search(String),
    ClearSearch,
    Advance(Direction),
    Filter(Vec<FilterEdit>),
    FiltersEnabled(bool),
    Exclude {
        name: String,
        path: PathBuf,
        states: Vec<WordState>,
    },
    ExclusionEnabled {
        name: String,
        enabled: bool,
    },
    Include(String),
    Progress,
    Save,
    Quit { force: bool },
    Help,
}

/// A single `key=value` filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEdit {
    MinLetters(usize),
    MinOccurrences(u32),
    InitialCapital(bool),
}

impl FilterEdit {
    fn apply(self, config: &mut FilterConfig) {
        match self {
            Self::MinLetters(value) => config.min_letters = value,
            Self::MinOccurrences(value) => config.min_occurrences = value,
            Self::InitialCapital(value) => config.require_initial_capital = value,
        }
    }
}

impl FromStr for FilterEdit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{s}'"))?;
        match key {
            "letters" | "min-letters" => Ok(Self::MinLetters(
                value.parse().with_context(|| format!("invalid letters '{value}'"))?,
            )),
            "occurrences" | "min-occurrences" => Ok(Self::MinOccurrences(
                value
                    .parse()
                    .with_context(|| format!("invalid occurrences '{value}'"))?,
            )),
            "capital" | "initial-capital" => Ok(Self::InitialCapital(parse_switch(value)?)),
            other => bail!("unknown filter setting '{other}'"),
        }
    }
}

impl FromStr for ReviewCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if let Some(query) = line.strip_prefix('/') {
            let query = query.trim();
            return Ok(if query.is_empty() {
                Self::ClearSearch
            } else {
                Self::Search(query.to_string())
            });
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();
        let parsed = match (command, rest.as_slice()) {
            ("k" | "known", words) if words.len() <= 1 => Self::Classify {
                state: WordState::Known,
                word: words.first().map(|word| (*word).to_string()),
            },
            ("x" | "unknown", words) if words.len() <= 1 => Self::Classify {
                state: WordState::Unknown,
                word: words.first().map(|word| (*word).to_string()),
            },
            ("u" | "unseen", [word]) => Self::Classify {
                state: WordState::Unclassified,
                word: Some((*word).to_string()),
            },
            ("u" | "unseen", []) => bail!("name the word to mark as unseen, e.g. 'u Oliver'"),
            ("selection" | "sel", []) => Self::Selection(SEEN.to_vec()),
            ("selection" | "sel", [states]) => Self::Selection(parse_states(states)?),
            ("n" | "next", []) => Self::Advance(Direction::Next),
            ("p" | "prev" | "previous", []) => Self::Advance(Direction::Previous),
            ("clear", []) => Self::ClearSearch,
            ("filter", edits) if !edits.is_empty() => Self::Filter(
                edits
                    .iter()
                    .map(|edit| edit.parse::<FilterEdit>())
                    .collect::<Result<Vec<_>>>()?,
            ),
            ("filters", [switch]) => Self::FiltersEnabled(parse_switch(switch)?),
            ("exclude", [name, path]) => Self::Exclude {
                name: (*name).to_string(),
                path: PathBuf::from(path),
                states: SEEN.to_vec(),
            },
            ("exclude", [name, path, states]) => Self::Exclude {
                name: (*name).to_string(),
                path: PathBuf::from(path),
                states: parse_states(states)?,
            },
            ("disable", [name]) => Self::ExclusionEnabled {
                name: (*name).to_string(),
                enabled: false,
            },
            ("enable", [name]) => Self::ExclusionEnabled {
                name: (*name).to_string(),
                enabled: true,
            },
            ("include", [name]) => Self::Include((*name).to_string()),
            ("progress", []) => Self::Progress,
            ("save", []) => Self::Save,
            ("quit" | "q", []) => Self::Quit { force: false },
            ("quit!" | "q!", []) => Self::Quit { force: true },
            ("help" | "?", []) => Self::Help,
            ("", _) => bail!("empty command"),
            (other, _) => bail!("unrecognised command '{other}' (type 'help')"),
        };
        Ok(parsed)
    }
}

/// Words a reader has already looked at.
const SEEN: [WordState; 2] = [WordState::Known, WordState::Unknown];

fn parse_states(value: &str) -> Result<Vec<WordState>> {
    match value {
        "known" => Ok(vec![WordState::Known]),
        "unknown" => Ok(vec![WordState::Unknown]),
        "seen" => Ok(SEEN.to_vec()),
        other => bail!("expected known, unknown or seen, got '{other}'"),
    }
}

fn parse_switch(value: &str) -> Result<bool> {
    match value {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => bail!("expected on or off, got '{other}'"),
    }
}

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Interactive review of one session file.
pub struct ReviewLoop {
    session: Session,
    file: SessionFile,
    path: PathBuf,
}

impl ReviewLoop {
    pub fn new(file: SessionFile, path: &Path) -> Result<Self> {
        let session = file
            .to_session()
            .with_context(|| format!("open session {}", path.display()))?;
        Ok(Self {
            session,
            file,
            path: path.to_path_buf(),
        })
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Ending input with unsaved changes saves them first.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(
            output,
            "Reviewing '{}' ({} words). Type 'help' for commands.",
            self.session.name(),
            self.session.catalog().len()
        )?;
        self.render(&mut output)?;

        for line in input.lines() {
            let line = line.context("read command")?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<ReviewCommand>() {
                Ok(command) => command,
                Err(error) => {
                    writeln!(output, "{error:#}")?;
                    continue;
                }
            };
            debug!(?command, "review command");
            match self.execute(command, &mut output) {
                Ok(Flow::Stop) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(error) => writeln!(output, "{}", describe(&error))?,
            }
        }

        if self.session.is_dirty() {
            self.save(&mut output)?;
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ReviewCommand, output: &mut W) -> Result<Flow> {
        match command {
            ReviewCommand::Classify { state, word: None } => {
                self.session.classify_current(state)?;
                self.render(output)?;
            }
            ReviewCommand::Classify {
                state,
                word: Some(text),
            } => {
                let index = self.index_of(&text)?;
                self.session.classify(index, state)?;
                self.render(output)?;
            }
            ReviewCommand::Selection(states) => {
                for state in states {
                    let selected = [state];
                    let words: Vec<&str> = self
                        .session
                        .exported_words(&selected)
                        .map(|(word, _)| word)
                        .collect();
                    if words.is_empty() {
                        writeln!(output, "{} (0)", state.display_name())?;
                    } else {
                        writeln!(
                            output,
                            "{} ({}): {}",
                            state.display_name(),
                            words.len(),
                            words.join(", ")
                        )?;
                    }
                }
            }
            ReviewCommand::Search(query) => {
                self.session.set_query(&query);
                self.render(output)?;
            }
            ReviewCommand::ClearSearch => {
                self.session.clear_search();
                self.render(output)?;
            }
            ReviewCommand::Advance(direction) => {
                self.session.advance(direction);
                self.render(output)?;
            }
            ReviewCommand::Filter(edits) => {
                let mut config = self.session.filter().clone();
                for edit in edits {
                    edit.apply(&mut config);
                }
                self.session.apply_filter(config)?;
                self.render(output)?;
            }
            ReviewCommand::FiltersEnabled(enabled) => {
                self.session.set_filters_enabled(enabled)?;
                self.render(output)?;
            }
            ReviewCommand::Exclude { name, path, states } => {
                let words = load_exclusion_words(&path, &states)?;
                let name = if name == "-" { list_name(&path) } else { name };
                let mut config = self.session.filter().clone();
                config.add_exclusion_set(ExclusionSet::from_words(name, words));
                self.session.apply_filter(config)?;
                self.render(output)?;
            }
            ReviewCommand::ExclusionEnabled { name, enabled } => {
                let mut config = self.session.filter().clone();
                if !config.set_exclusion_enabled(&name, enabled) {
                    bail!("no word list named '{name}'");
                }
                self.session.apply_filter(config)?;
                self.render(output)?;
            }
            ReviewCommand::Include(name) => {
                let mut config = self.session.filter().clone();
                if config.remove_exclusion_set(&name).is_none() {
                    bail!("no word list named '{name}'");
                }
                self.session.apply_filter(config)?;
                self.render(output)?;
            }
            ReviewCommand::Progress => {
                writeln!(output, "{}", progress_table(&self.session.progress()))?;
            }
            ReviewCommand::Save => self.save(output)?,
            ReviewCommand::Quit { force } => {
                if self.session.is_dirty() && !force {
                    writeln!(
                        output,
                        "There are unsaved changes. Use 'save' first or 'quit!' to discard them."
                    )?;
                } else {
                    return Ok(Flow::Stop);
                }
            }
            ReviewCommand::Help => writeln!(output, "{HELP}")?,
        }
        Ok(Flow::Continue)
    }

    /// Catalog index of `text`, matching exactly before ignoring case.
    fn index_of(&self, text: &str) -> Result<usize> {
        let catalog = self.session.catalog();
        catalog
            .iter()
            .find(|word| word.text == text)
            .or_else(|| {
                catalog
                    .iter()
                    .find(|word| word.text.to_lowercase() == text.to_lowercase())
            })
            .map(|word| word.index)
            .ok_or_else(|| anyhow!("'{text}' is not in the word list"))
    }

    fn save<W: Write>(&mut self, output: &mut W) -> Result<()> {
        self.file.update_from(&self.session);
        save_session(&mut self.file, &self.path)?;
        self.session.mark_saved();
        info!(session = %self.session.name(), "saved review session");
        writeln!(output, "Saved {}", self.path.display())?;
        Ok(())
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<()> {
        let progress = self.session.progress();
        match self.session.current_word() {
            Some(word) => writeln!(
                output,
                "[{}/{}] {} ({} uses)",
                word.index + 1,
                progress.total,
                word.text,
                word.occurrences
            )?,
            None => writeln!(output, "No words left to review.")?,
        }
        match self.session.match_status() {
            MatchStatus::Inactive => {}
            status => writeln!(output, "Search '{}': {status}", self.session.search().query())?,
        }
        Ok(())
    }
}

/// User-facing text for a failed command.
fn describe(error: &anyhow::Error) -> String {
    let (message, hint) = if let Some(review) = error.downcast_ref::<ReviewError>() {
        (review.user_message(), review.suggestion())
    } else if let Some(store) = error.downcast_ref::<StoreError>() {
        (store.user_message(), store.suggestion())
    } else {
        return format!("{error:#}");
    };
    match hint {
        Some(hint) => format!("{message} {hint}"),
        None => message,
    }
}
