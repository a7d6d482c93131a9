use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use audioscribe_core::export::domain::clipboard::Clipboard;
use audioscribe_core::export::domain::transcript_writer::{transcript_file_name, TranscriptWriter};
use audioscribe_core::export::infrastructure::system_clipboard::SystemClipboard;
use audioscribe_core::export::infrastructure::text_file_writer::TextFileWriter;
use audioscribe_core::pipeline::infrastructure::timed_pipeline_runner::TimedPipelineRunner;
use audioscribe_core::pipeline::session::TranscriptionSession;
use audioscribe_core::pipeline::stage::StageProgress;
use audioscribe_core::pipeline::transcribe_use_case::TranscribeUseCase;
use audioscribe_core::shared::constants::ALLOWED_MEDIA_TYPES;
use audioscribe_core::transcription::infrastructure::demo_backend::{demo_stages, DemoBackend};
use audioscribe_core::upload::domain::upload_validator::{UploadError, UploadValidator};
use audioscribe_core::upload::infrastructure::file_probe::FileProbe;

/// Audio transcription with upload checks and staged progress reporting.
#[derive(Parser)]
#[command(name = "audioscribe")]
struct Cli {
    /// Input audio file.
    input: PathBuf,

    /// Also write the transcript here; a directory gets the derived name.
    output: Option<PathBuf>,

    /// Copy the transcript to the system clipboard when done.
    #[arg(long)]
    copy: bool,

    /// Print the transcript as a JSON object instead of plain text; the word
    /// count field counts whitespace-separated words.
    #[arg(long)]
    json: bool,

    /// Upload size ceiling in MiB (1-16384).
    #[arg(long, default_value = "100")]
    max_size_mib: u64,
}

/// Largest accepted --max-size-mib value (16 GiB ceiling).
const MAX_CEILING_MIB: u64 = 16_384;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let candidate = FileProbe::probe(&cli.input)?;
    log::info!(
        "Upload candidate: {} ({:.2} MB, {})",
        candidate.name,
        candidate.size_bytes as f64 / (1024.0 * 1024.0),
        candidate.declared_media_type
    );

    let validator = UploadValidator::new(ALLOWED_MEDIA_TYPES, cli.max_size_mib * 1024 * 1024);
    let upload = match validator.validate(candidate) {
        Ok(upload) => upload,
        Err(e @ UploadError::UnsupportedFormat) => {
            return Err(format!("{e} (supported: WAV, MP3, OGG, WebM, M4A)").into());
        }
        Err(e @ UploadError::FileTooLarge) => {
            let ceiling_mib = validator.max_size_bytes() / (1024 * 1024);
            return Err(format!("{e} (ceiling is {ceiling_mib} MiB)").into());
        }
    };

    let progress: Box<dyn Fn(&StageProgress) -> bool + Send> = Box::new(|progress| {
        eprint!(
            "\r{:<35} {:>3.0}%",
            progress.stage,
            progress.percent_complete()
        );
        true
    });

    let use_case = TranscribeUseCase::new(
        TranscriptionSession::new(),
        Box::new(TimedPipelineRunner::new()),
        Box::new(DemoBackend::new()),
        demo_stages(),
        Some(progress),
        None,
    );
    let transcript = use_case.execute(&upload)?;
    eprintln!();
    log::info!("Transcription complete: {} words", transcript.word_count());

    if cli.json {
        let value = serde_json::json!({
            "source": upload.name(),
            "text": transcript.text(),
            "word_count": transcript.word_count(),
        });
        println!("{value}");
    } else {
        println!("{}", transcript.text());
    }

    if let Some(output) = &cli.output {
        let path = resolve_output_path(output, upload.name());
        TextFileWriter::new().write_transcript(&path, &transcript)?;
        log::info!("Transcript written to {}", path.display());
    }

    if cli.copy {
        match SystemClipboard::new().copy_text(transcript.text()) {
            Ok(()) => log::info!("Transcript copied to clipboard"),
            Err(e) => log::warn!("{e}"),
        }
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.max_size_mib == 0 || cli.max_size_mib > MAX_CEILING_MIB {
        return Err(format!(
            "Size ceiling must be between 1 and {MAX_CEILING_MIB} MiB, got {}",
            cli.max_size_mib
        )
        .into());
    }
    Ok(())
}

fn resolve_output_path(output: &Path, source_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(transcript_file_name(source_name))
    } else {
        output.to_path_buf()
    }
}
