//! Command line interface for the codec. Decodes event files into typed
//! content records, encodes creation drafts into publishable envelopes,
//! runs the pre-publication validator, and converts address tokens to and
//! from their shareable `naddr` form.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};

use coursr::{
    classify, decode_course_list, decode_resource, encode_course_list, encode_resource,
    validate_course, validate_resource, AddressRef, ContentFamily, CourseDraft, Event,
    ResourceDraft, ResourceKind,
};

/// Command line interface entry point.
#[derive(Parser)]
#[command(name = "coursr", author, version, about = "Nostr course-content codec")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Decode one or more event JSON files into typed content records.
    Decode {
        /// Paths to JSON event files to decode.
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Validate and encode a course draft into a course list envelope.
    EncodeCourse {
        /// Path to a JSON course draft.
        file: String,
    },
    /// Validate and encode a resource draft into an article envelope.
    EncodeResource {
        /// Path to a JSON resource draft.
        file: String,
        /// Content family to encode as.
        #[arg(long, value_enum)]
        kind: ResourceArg,
    },
    /// Check a draft against the publication rules without encoding.
    Validate {
        /// Path to a JSON draft.
        file: String,
        /// Draft type.
        #[arg(long, value_enum)]
        kind: DraftArg,
    },
    /// Convert addresses between token and `naddr` form.
    Addr {
        #[command(subcommand)]
        action: AddrAction,
    },
}

/// Resource families accepted by `encode-resource`.
#[derive(Clone, Copy, ValueEnum)]
enum ResourceArg {
    Lesson,
    Document,
    Video,
}

impl From<ResourceArg> for ResourceKind {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Lesson => ResourceKind::Lesson,
            ResourceArg::Document => ResourceKind::Document,
            ResourceArg::Video => ResourceKind::Video,
        }
    }
}

/// Draft types accepted by `validate`.
#[derive(Clone, Copy, ValueEnum)]
enum DraftArg {
    Course,
    Lesson,
    Document,
    Video,
}

/// Operations available under `coursr addr`.
#[derive(Subcommand)]
enum AddrAction {
    /// Encode a `kind:pubkey:identifier` token as an `naddr` string.
    Encode {
        token: String,
        /// Relay hints to embed, repeatable.
        #[arg(long = "relay")]
        relays: Vec<String>,
    },
    /// Decode an `naddr` string back into its token and relay hints.
    Decode { naddr: String },
}

/// Execute the selected CLI subcommand.
fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Decode { files } => decode_files(&files),
        Commands::EncodeCourse { file } => {
            let draft: CourseDraft = read_json(&file)?;
            validate_course(&draft)?;
            print_json(&encode_course_list(&draft))
        }
        Commands::EncodeResource { file, kind } => {
            let draft: ResourceDraft = read_json(&file)?;
            let kind = ResourceKind::from(kind);
            validate_resource(&draft, kind)?;
            print_json(&encode_resource(&draft, kind))
        }
        Commands::Validate { file, kind } => {
            match kind {
                DraftArg::Course => {
                    let draft: CourseDraft = read_json(&file)?;
                    validate_course(&draft)?;
                }
                DraftArg::Lesson | DraftArg::Document | DraftArg::Video => {
                    let draft: ResourceDraft = read_json(&file)?;
                    let kind = match kind {
                        DraftArg::Lesson => ResourceKind::Lesson,
                        DraftArg::Video => ResourceKind::Video,
                        _ => ResourceKind::Document,
                    };
                    validate_resource(&draft, kind)?;
                }
            }
            println!("ok");
            Ok(())
        }
        Commands::Addr { action } => match action {
            AddrAction::Encode { token, relays } => {
                let addr = AddressRef::parse(&token)?;
                println!("{}", addr.to_naddr(&relays)?);
                Ok(())
            }
            AddrAction::Decode { naddr } => {
                let (addr, relays) = AddressRef::from_naddr(&naddr)?;
                println!("{}", addr.token());
                for relay in relays {
                    println!("{relay}");
                }
                Ok(())
            }
        },
    }
}

/// Decode each event file independently; one bad event never aborts the
/// batch. Fails at the end if anything failed.
fn decode_files(files: &[String]) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for file in files {
        match decode_file(file) {
            Ok(()) => {}
            Err(err) => {
                failed += 1;
                tracing::error!(%file, %err, "decode failed");
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} event(s) failed to decode", files.len());
    }
    Ok(())
}

fn decode_file(file: &str) -> anyhow::Result<()> {
    let ev: Event = read_json(file)?;
    match classify(ev.kind)?.family {
        ContentFamily::CourseList => print_json(&decode_course_list(&ev)?),
        ContentFamily::FreeArticle | ContentFamily::PaidListing => {
            print_json(&decode_resource(&ev)?)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let data = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {path}"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    run(Cli::parse())
}
