//! The combine flow: prompt, validate, summarize, run ffmpeg, report.
//!
//! The flow is linear with two early exits (missing video, missing audio)
//! and one final branch on the encoder's exit status:
//!
//! 1. Banner
//! 2. Collect video, audio, output (prompting for anything not preset)
//! 3. Check video exists, then audio
//! 4. Summary of the three paths
//! 5. One ffmpeg invocation with the fixed argument template
//! 6. Success or failure message

use std::io::{Read, Write};

use crate::errors::{CombineError, CombineResult};
use crate::logging::RunLogger;
use crate::models::{InputRole, MuxRequest, PresetAnswers, RunOutcome};
use crate::mux::{format_command_line, format_tokens_pretty, EncodeProfile, FfmpegArgsBuilder};
use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use crate::validation;

const VIDEO_PROMPT: &str = "Enter the video file name (e.g. video.mp4): ";
const AUDIO_PROMPT: &str = "Enter the audio file name (e.g. audio.wav): ";
const OUTPUT_PROMPT: &str = "Enter the output file name (e.g. output.mp4): ";

/// Drives one combine run.
pub struct Combiner<'a, C: CommandRunner> {
    runner: &'a C,
    logger: &'a RunLogger,
    /// ffmpeg program name or path.
    program: String,
    profile: EncodeProfile,
    /// Print the command instead of running it.
    dry_run: bool,
}

impl<'a, C: CommandRunner> Combiner<'a, C> {
    pub fn new(runner: &'a C, logger: &'a RunLogger) -> Self {
        Self {
            runner,
            logger,
            program: "ffmpeg".to_string(),
            profile: EncodeProfile::STANDARD,
            dry_run: false,
        }
    }

    /// Set a custom ffmpeg program name or path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Only print the command.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the whole flow.
    ///
    /// Errors are reported through the logger before being returned.
    pub fn run<R: Read, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        preset: &PresetAnswers,
    ) -> CombineResult<RunOutcome> {
        let result = self.run_inner(prompter, preset);
        if let Err(ref e) = result {
            tracing::debug!("Run stopped: {:?}", e);
            self.logger.error(&e.to_string());
        }
        result
    }

    fn run_inner<R: Read, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        preset: &PresetAnswers,
    ) -> CombineResult<RunOutcome> {
        self.show_banner();
        let request = self.collect_request(prompter, preset)?;
        self.execute(&request)
    }

    fn show_banner(&self) {
        self.logger.banner("Video + Audio Combiner");
        self.logger.info(
            "Combines a video-only file and an audio file into one MP4 (H.264 + AAC) with ffmpeg.",
        );
        self.logger
            .info("Both input files should be in the current directory.");
    }

    /// Collect the three paths, prompting for any not already supplied.
    pub fn collect_request<R: Read, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        preset: &PresetAnswers,
    ) -> CombineResult<MuxRequest> {
        let video = answer(prompter, preset.video.as_deref(), VIDEO_PROMPT)?;
        require_non_empty(InputRole::Video, &video)?;

        let audio = answer(prompter, preset.audio.as_deref(), AUDIO_PROMPT)?;
        require_non_empty(InputRole::Audio, &audio)?;

        let output = answer(prompter, preset.output.as_deref(), OUTPUT_PROMPT)?;

        Ok(MuxRequest::new(video, audio, output))
    }

    /// Validate inputs, run ffmpeg once and report the outcome.
    pub fn execute(&self, request: &MuxRequest) -> CombineResult<RunOutcome> {
        validation::check_inputs(request)?;

        self.show_summary(request);

        let options = FfmpegArgsBuilder::new(request, &self.profile).build_grouped();
        let tokens = options.concat();
        self.log_command(&options, &tokens);

        if self.dry_run {
            self.logger.info("Dry run: ffmpeg was not started.");
            return Ok(RunOutcome::DryRun);
        }

        let status = self.runner.run(&self.program, &tokens)?;

        if status.success() {
            self.logger.success(&format!(
                "Successfully created: {}",
                request.output.display()
            ));
            Ok(RunOutcome::Succeeded {
                output: request.output.clone(),
            })
        } else {
            let code = status
                .code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "terminated by signal".to_string());
            self.logger.error(&format!(
                "ffmpeg failed ({}). Check the ffmpeg output above for details.",
                code
            ));
            Ok(RunOutcome::ToolFailed {
                exit_code: status.code,
            })
        }
    }

    fn show_summary(&self, request: &MuxRequest) {
        self.logger.section("Summary");
        self.logger
            .info(&format!("Video:  {}", request.video.display()));
        self.logger
            .info(&format!("Audio:  {}", request.audio.display()));
        self.logger
            .info(&format!("Output: {}", request.output.display()));
    }

    fn log_command(&self, options: &[Vec<String>], tokens: &[String]) {
        self.logger.section("Running ffmpeg");
        self.logger
            .command(&format_command_line(&self.program, tokens));

        let config = self.logger.config();
        if config.show_command_pretty {
            self.logger
                .command_pretty(&format_tokens_pretty(&self.program, options));
        }
        if config.show_command_json {
            self.logger.command_json(tokens);
        }
    }
}

/// Use the preset value if there is one, otherwise prompt.
fn answer<R: Read, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: Option<&str>,
    label: &str,
) -> CombineResult<String> {
    match preset {
        Some(value) => Ok(value.trim().to_string()),
        None => prompter.ask(label),
    }
}

fn require_non_empty(role: InputRole, value: &str) -> CombineResult<()> {
    if value.is_empty() {
        return Err(CombineError::invalid_input(format!(
            "{} file name must not be empty",
            role
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{init_test_tracing, ConsoleSink, LogConfig};
    use crate::runner::ExitStatusCode;
    use parking_lot::Mutex;
    use std::cell::RefCell;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    /// Records every invocation and returns a fixed exit code.
    struct FakeRunner {
        exit_code: Option<i32>,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        fn exiting_with(exit_code: Option<i32>) -> Self {
            Self {
                exit_code,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String]) -> CombineResult<ExitStatusCode> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            Ok(ExitStatusCode {
                code: self.exit_code,
            })
        }
    }

    fn capture_logger(config: LogConfig) -> (RunLogger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = lines.clone();
        let sink: ConsoleSink =
            Box::new(move |line: &str| sink_lines.lock().push(line.to_string()));
        (RunLogger::new(config, sink, None).unwrap(), lines)
    }

    /// Temp dir containing clip.mp4 and track.wav.
    fn media_dir() -> (TempDir, PathBuf, PathBuf) {
        let dir = tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        let audio = dir.path().join("track.wav");
        fs::write(&video, b"video").unwrap();
        fs::write(&audio, b"audio").unwrap();
        (dir, video, audio)
    }

    fn answers(video: &Path, audio: &Path, output: &Path) -> String {
        format!(
            "{}\n{}\n{}\n",
            video.display(),
            audio.display(),
            output.display()
        )
    }

    fn run_with(
        runner: &FakeRunner,
        logger: &RunLogger,
        input: String,
    ) -> CombineResult<RunOutcome> {
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        Combiner::new(runner, logger).run(&mut prompter, &PresetAnswers::default())
    }

    #[test]
    fn success_invokes_once_and_reports_output() {
        init_test_tracing();
        let (dir, video, audio) = media_dir();
        let output = dir.path().join("final.mp4");
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, lines) = capture_logger(LogConfig::default());

        let outcome = run_with(&runner, &logger, answers(&video, &audio, &output)).unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Succeeded {
                output: output.clone()
            }
        );

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (program, args) = &calls[0];
        assert_eq!(program, "ffmpeg");
        let request = MuxRequest::new(&video, &audio, &output);
        assert_eq!(
            args,
            &FfmpegArgsBuilder::new(&request, &EncodeProfile::STANDARD).build()
        );

        let log = lines.lock().join("\n");
        assert!(log.contains("Video + Audio Combiner"));
        assert!(log.contains(&format!("Video:  {}", video.display())));
        assert!(log.contains(&format!("Audio:  {}", audio.display())));
        assert!(log.contains(&format!("Output: {}", output.display())));
        assert!(log.contains("Successfully created"));
        assert!(log.contains("final.mp4"));
    }

    #[test]
    fn missing_video_stops_before_invocation() {
        let dir = tempdir().unwrap();
        let video = dir.path().join("missing.mp4");
        let audio = dir.path().join("track.wav");
        fs::write(&audio, b"audio").unwrap();
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, lines) = capture_logger(LogConfig::default());

        let err = run_with(
            &runner,
            &logger,
            answers(&video, &audio, Path::new("final.mp4")),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CombineError::MissingInput {
                role: InputRole::Video,
                ..
            }
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(runner.calls.borrow().is_empty());

        let log = lines.lock().join("\n");
        assert!(log.contains("[ERROR]"));
        assert!(log.contains("missing.mp4"));
        assert!(!log.contains("Summary"));
    }

    #[test]
    fn missing_audio_stops_before_invocation() {
        let (dir, video, _) = media_dir();
        let audio = dir.path().join("missing.wav");
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, lines) = capture_logger(LogConfig::default());

        let err = run_with(
            &runner,
            &logger,
            answers(&video, &audio, Path::new("final.mp4")),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CombineError::MissingInput {
                role: InputRole::Audio,
                ..
            }
        ));
        assert!(runner.calls.borrow().is_empty());
        assert!(lines.lock().join("\n").contains("missing.wav"));
    }

    #[test]
    fn tool_failure_is_reported_without_success() {
        let (dir, video, audio) = media_dir();
        let output = dir.path().join("final.mp4");
        let runner = FakeRunner::exiting_with(Some(1));
        let (logger, lines) = capture_logger(LogConfig::default());

        let outcome = run_with(&runner, &logger, answers(&video, &audio, &output)).unwrap();

        assert_eq!(outcome, RunOutcome::ToolFailed { exit_code: Some(1) });
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(runner.calls.borrow().len(), 1);

        let log = lines.lock().join("\n");
        assert!(log.contains("ffmpeg failed"));
        assert!(!log.contains("Successfully created"));
    }

    #[test]
    fn signal_termination_is_failure() {
        let (dir, video, audio) = media_dir();
        let output = dir.path().join("final.mp4");
        let runner = FakeRunner::exiting_with(None);
        let (logger, lines) = capture_logger(LogConfig::default());

        let outcome = run_with(&runner, &logger, answers(&video, &audio, &output)).unwrap();

        assert_eq!(outcome.exit_code(), 1);
        assert!(lines.lock().join("\n").contains("terminated by signal"));
    }

    #[test]
    fn preset_answers_skip_prompts() {
        let (dir, video, audio) = media_dir();
        let output = dir.path().join("final.mp4");
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, _) = capture_logger(LogConfig::default());

        let preset = PresetAnswers {
            video: Some(video.display().to_string()),
            audio: Some(audio.display().to_string()),
            output: None,
        };
        let input = format!("{}\n", output.display());
        let mut shown = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(input), &mut shown);

        let outcome = Combiner::new(&runner, &logger)
            .run(&mut prompter, &preset)
            .unwrap();

        assert!(outcome.is_success());
        drop(prompter);
        assert_eq!(String::from_utf8(shown).unwrap(), OUTPUT_PROMPT);
    }

    #[test]
    fn overwrite_answer_is_left_for_ffmpeg() {
        let (dir, video, audio) = media_dir();
        let output = dir.path().join("final.mp4");
        fs::write(&output, b"old").unwrap();
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, _) = capture_logger(LogConfig::default());

        let mut input = Cursor::new(format!("{}y\n", answers(&video, &audio, &output)));
        {
            let mut prompter = Prompter::new(&mut input, std::io::sink());
            Combiner::new(&runner, &logger)
                .run(&mut prompter, &PresetAnswers::default())
                .unwrap();
        }

        assert_eq!(runner.calls.borrow().len(), 1);
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "y\n");
    }

    #[test]
    fn empty_video_answer_is_invalid() {
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, _) = capture_logger(LogConfig::default());

        let err = run_with(&runner, &logger, "\n".to_string()).unwrap_err();

        assert!(matches!(err, CombineError::InvalidInput(_)));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn closed_input_is_error() {
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, _) = capture_logger(LogConfig::default());

        let err = run_with(&runner, &logger, "clip.mp4\n".to_string()).unwrap_err();

        assert!(matches!(err, CombineError::InputClosed));
    }

    #[test]
    fn dry_run_prints_command_only() {
        let (dir, video, audio) = media_dir();
        let output = dir.path().join("final.mp4");
        let runner = FakeRunner::exiting_with(Some(0));
        let config = LogConfig {
            show_command_pretty: true,
            ..LogConfig::default()
        };
        let (logger, lines) = capture_logger(config);

        let mut prompter = Prompter::new(Cursor::new(answers(&video, &audio, &output)), Vec::new());
        let outcome = Combiner::new(&runner, &logger)
            .with_program("/opt/ffmpeg/bin/ffmpeg")
            .with_dry_run(true)
            .run(&mut prompter, &PresetAnswers::default())
            .unwrap();

        assert_eq!(outcome, RunOutcome::DryRun);
        assert!(runner.calls.borrow().is_empty());

        let log = lines.lock().join("\n");
        assert!(log.contains("$ /opt/ffmpeg/bin/ffmpeg -i "));
        assert!(log.contains("ffmpeg options (pretty)"));
        assert!(!log.contains("Successfully created"));
    }

    #[test]
    fn custom_program_is_invoked() {
        let (dir, video, audio) = media_dir();
        let output = dir.path().join("final.mp4");
        let runner = FakeRunner::exiting_with(Some(0));
        let (logger, _) = capture_logger(LogConfig::default());

        Combiner::new(&runner, &logger)
            .with_program("/usr/local/bin/ffmpeg")
            .execute(&MuxRequest::new(&video, &audio, &output))
            .unwrap();

        assert_eq!(runner.calls.borrow()[0].0, "/usr/local/bin/ffmpeg");
    }
}
