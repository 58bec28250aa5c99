//! Tab actions.
//!
//! Each action checks its preconditions on the UI thread, opens a dialog when
//! one is not met, and otherwise submits a [`Job`]. Job outcomes come back
//! through [`App::process_events`] and are applied by [`App::apply_completion`]
//! and [`App::apply_failure`].

use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::App;
use crate::app::state::{
    Activity, AppEvent, Dialog, FACT_LIBRARY_PLACEHOLDER, Job, text_area_with, text_of,
};
use crate::core::{GenerationClient, GenerationResult, Prompt, Speaker, prompts};
use crate::fs::{Artifact, WorkspacePaths};
use crate::tui::widgets::OutputLineType;

/// Builds a check prompt from a reference artifact and the text under review.
type CheckPrompt = fn(&str, &str) -> Prompt;

impl App {
    // =========================================================================
    // Idea Workshop
    // =========================================================================

    /// Sends the workshop input as the next user turn and asks the coach to reply.
    ///
    /// An empty message is ignored. The user turn stays in the conversation
    /// even if the reply fails.
    pub(crate) fn send_message(&mut self) {
        if self.is_busy(Job::CoachReply.tab()) {
            return;
        }

        let message = text_of(&self.workshop.input).trim().to_string();
        if message.is_empty() {
            return;
        }

        self.workshop.clear_input();
        self.workshop.conversation.push(Speaker::User, message.clone());
        self.workshop
            .log
            .push_entry(OutputLineType::User, Speaker::User.display_name(), &message);

        let prompt = prompts::coach_reply(&self.workshop.conversation);
        self.submit(Job::CoachReply, generate(self.client.clone(), prompt));
    }

    /// Synthesizes the workshop report from the conversation so far.
    pub(crate) fn save_report(&mut self) {
        if self.is_busy(Job::WorkshopReport.tab()) {
            return;
        }

        if self.workshop.conversation.is_empty() {
            self.show_dialog(Dialog::info(
                "Nothing to Save",
                "Start a conversation first.",
            ));
            return;
        }

        let prompt = prompts::workshop_report(&self.workshop.conversation);
        self.submit(Job::WorkshopReport, generate(self.client.clone(), prompt));
    }

    // =========================================================================
    // Style Builder
    // =========================================================================

    /// Generates a style profile from the author and description fields.
    pub(crate) fn generate_style(&mut self) {
        if self.is_busy(Job::StyleProfile.tab()) {
            return;
        }

        let description = text_of(&self.style_builder.description).trim().to_string();
        if description.is_empty() {
            self.show_dialog(Dialog::info(
                "Missing Description",
                "Please describe the desired style first.",
            ));
            return;
        }
        let author = text_of(&self.style_builder.author).trim().to_string();

        let prompt = prompts::style_profile(&author, &description);
        self.submit(Job::StyleProfile, generate(self.client.clone(), prompt));
    }

    // =========================================================================
    // Fact Library
    // =========================================================================

    /// Saves the trimmed editor content as the fact library.
    pub(crate) fn save_fact_library(&mut self) {
        let content = text_of(&self.fact_library.editor).trim().to_string();
        if content.is_empty() {
            self.show_dialog(Dialog::info(
                "Nothing to Save",
                "Add some facts before saving.",
            ));
            return;
        }

        match self.paths.write_artifact(Artifact::FactLibrary, &content) {
            Ok(()) => {
                tracing::info!(bytes = content.len(), "fact library saved");
                self.set_status("Fact library saved");
            }
            Err(e) => {
                let message = format!("{e:#}");
                tracing::warn!(error = %message, "fact library save failed");
                self.set_status("Error saving fact library");
                self.show_dialog(Dialog::error("Fact Library Error", message));
            }
        }
    }

    /// Replaces the editor content with the saved fact library.
    pub(crate) fn reload_fact_library(&mut self) {
        if !self.paths.has_artifact(Artifact::FactLibrary) {
            self.set_status("No saved fact library");
            return;
        }

        match self.load_fact_library() {
            Ok(()) => self.set_status("Fact library reloaded"),
            Err(e) => {
                let message = format!("{e:#}");
                tracing::warn!(error = %message, "fact library reload failed");
                self.show_dialog(Dialog::error("Fact Library Error", message));
            }
        }
    }

    /// Loads the saved fact library into the editor, if there is one.
    pub(crate) fn load_fact_library(&mut self) -> Result<()> {
        if !self.paths.has_artifact(Artifact::FactLibrary) {
            return Ok(());
        }
        let content = self.paths.read_artifact(Artifact::FactLibrary)?;
        self.fact_library.editor = text_area_with(FACT_LIBRARY_PLACEHOLDER, &content);
        tracing::debug!(bytes = content.len(), "fact library loaded");
        Ok(())
    }

    // =========================================================================
    // Fact Checker / Checkers
    // =========================================================================

    /// Verifies the fact checker input against the fact library, with search.
    pub(crate) fn run_fact_check(&mut self) {
        let text = text_of(&self.fact_checker.input);
        self.run_check(Job::FactCheck, &text);
    }

    /// Reviews the checkers input against the style profile.
    pub(crate) fn run_style_check(&mut self) {
        let text = text_of(&self.checkers.input);
        self.run_check(Job::StyleCheck, &text);
    }

    /// Reviews the checkers input against the idea workshop report.
    pub(crate) fn run_consistency_check(&mut self) {
        let text = text_of(&self.checkers.input);
        self.run_check(Job::ConsistencyCheck, &text);
    }

    /// Shared precondition checks and submission for the three checks.
    ///
    /// The reference artifact is only tested for existence here; its content
    /// is read inside the task.
    fn run_check(&mut self, job: Job, text: &str) {
        if self.is_busy(job.tab()) {
            return;
        }

        let text = text.trim();
        if text.is_empty() {
            self.show_dialog(Dialog::info("Missing Text", "Paste text to review first."));
            return;
        }

        let (artifact, build, search, missing): (Artifact, CheckPrompt, bool, Dialog) = match job
        {
            Job::FactCheck => (
                Artifact::FactLibrary,
                prompts::fact_check,
                true,
                Dialog::warning(
                    "Missing Fact Library",
                    "Save a fact library before running this check.",
                ),
            ),
            Job::StyleCheck => (
                Artifact::StyleProfile,
                prompts::style_check,
                false,
                Dialog::warning(
                    "Missing Style Profile",
                    "Generate a style profile before running this check.",
                ),
            ),
            Job::ConsistencyCheck => (
                Artifact::IdeaReport,
                prompts::consistency_check,
                false,
                Dialog::warning(
                    "Missing Workshop Report",
                    "Save an idea workshop report before running this check.",
                ),
            ),
            Job::CoachReply | Job::WorkshopReport | Job::StyleProfile => return,
        };

        if !self.paths.has_artifact(artifact) {
            self.show_dialog(missing);
            return;
        }

        let work = check(
            self.client.clone(),
            self.paths.clone(),
            artifact,
            text.to_string(),
            build,
            search,
        );
        self.submit(job, work);
    }

    // =========================================================================
    // Submission and results
    // =========================================================================

    /// Marks the owning tab busy and runs `work` on the task runner.
    fn submit<Fut>(&mut self, job: Job, work: Fut)
    where
        Fut: Future<Output = Result<GenerationResult>> + Send + 'static,
    {
        if let Some(activity) = self.activity_mut(job.tab()) {
            *activity = Activity::Busy;
        }
        self.set_status(job.running_status());
        tracing::info!(?job, "job submitted");

        let success_tx = self.event_tx.clone();
        let failure_tx = self.event_tx.clone();
        self.runner.submit(
            work,
            move |result| {
                let _ = success_tx.send(AppEvent::Completed { job, result });
            },
            move |message| {
                let _ = failure_tx.send(AppEvent::Failed { job, message });
            },
        );
    }

    /// Applies a successful job result to its tab.
    pub(crate) fn apply_completion(&mut self, job: Job, result: GenerationResult) {
        let text = result.text.trim();
        tracing::info!(?job, mock = result.is_mock, chars = text.len(), "job completed");

        match job {
            Job::CoachReply => {
                self.workshop.conversation.push(Speaker::Coach, text);
                self.workshop
                    .log
                    .push_entry(OutputLineType::Coach, Speaker::Coach.display_name(), text);
                if result.is_mock {
                    self.push_mock_note();
                }
            }
            Job::WorkshopReport => {
                if let Err(e) = self.paths.write_artifact(Artifact::IdeaReport, text) {
                    self.apply_failure(job, format!("{e:#}"));
                    return;
                }
                let path = display_path(&self.paths.artifact(Artifact::IdeaReport));
                tracing::info!(path = %path.display(), "workshop report saved");
                self.workshop.log.push_entry(
                    OutputLineType::System,
                    "System",
                    &format!("Saved workshop report to {}.", path.display()),
                );
                if result.is_mock {
                    self.push_mock_note();
                }
            }
            Job::StyleProfile => {
                if let Err(e) = self.paths.write_artifact(Artifact::StyleProfile, text) {
                    self.apply_failure(job, format!("{e:#}"));
                    return;
                }
                tracing::info!("style profile saved");
                let notice = result.is_mock.then(|| self.mock_notice());
                self.style_builder.preview.set_result(text, notice.as_deref());
            }
            Job::FactCheck => {
                let notice = result.is_mock.then(|| self.mock_notice());
                self.fact_checker.results.set_result(text, notice.as_deref());
            }
            Job::StyleCheck | Job::ConsistencyCheck => {
                let notice = result.is_mock.then(|| self.mock_notice());
                self.checkers.results.set_result(text, notice.as_deref());
            }
        }

        if let Some(activity) = self.activity_mut(job.tab()) {
            *activity = Activity::Idle;
        }
        self.set_status(job.success_status());
    }

    /// Reports a failed job: idle tab, failure status and an error dialog.
    pub(crate) fn apply_failure(&mut self, job: Job, message: String) {
        tracing::warn!(?job, error = %message, "job failed");

        if let Some(activity) = self.activity_mut(job.tab()) {
            *activity = Activity::Idle;
        }
        self.set_status(job.failure_status());
        self.show_dialog(Dialog::error(job.error_title(), message));
    }

    /// Notice appended to result panes when the output is the offline mock.
    fn mock_notice(&self) -> String {
        format!("[Mock output used. Populate {}]", self.paths.key_file_name())
    }

    fn push_mock_note(&mut self) {
        let note = format!("Using mock output. Populate {}.", self.paths.key_file_name());
        self.workshop
            .log
            .push_entry(OutputLineType::Notice, "Note", &note);
    }
}

/// Generates text for a prompt with its system instruction.
async fn generate(client: GenerationClient, prompt: Prompt) -> Result<GenerationResult> {
    Ok(client.generate(&prompt.body, Some(prompt.system)).await?)
}

/// Reads the reference artifact and runs one check over `text`.
async fn check(
    client: GenerationClient,
    paths: WorkspacePaths,
    artifact: Artifact,
    text: String,
    build: CheckPrompt,
    search: bool,
) -> Result<GenerationResult> {
    let reference = paths.read_artifact(artifact)?;
    let prompt = build(&reference, &text);
    let result = if search {
        client
            .generate_with_search(&prompt.body, Some(prompt.system))
            .await?
    } else {
        client.generate(&prompt.body, Some(prompt.system)).await?
    };
    Ok(result)
}

/// Absolute form of `path` for messages, or `path` itself if that fails.
fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
