//! Interactive dashboard mode

use super::{fetch_document, OFFLINE_MESSAGE};
use crate::console::CliConsole;
use memdash_core::client::MemoryBackend;
use memdash_core::error::MemdashResult;
use memdash_core::memory::{ForgetCategory, ForgetRequest, MemoryDocument};
use memdash_core::render::render_document;

/// A parsed dashboard command.
#[derive(Debug, Clone, PartialEq)]
enum DashCommand {
    Refresh,
    Help,
    Quit,
    Forget(ForgetRequest),
    Unknown(String),
}

/// Run the interactive dashboard loop.
pub async fn execute(backend: &dyn MemoryBackend, verbose: bool) -> MemdashResult<()> {
    let console = CliConsole::new(verbose);

    match fetch_document(&console, backend).await {
        Ok(document) => console.print_dashboard(&render_document(&document)),
        Err(e) => {
            console.error(OFFLINE_MESSAGE);
            console.info(&format!("Cause: {e}"));
            console.warn("Type 'refresh' to try again once the backend is reachable.");
        }
    }

    loop {
        let input = match console.input("memdash") {
            Ok(input) => input,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                console.info("Goodbye!");
                break;
            }
            Err(e) => {
                console.error(&format!("Input error: {e}"));
                continue;
            }
        };

        match parse_command(&input) {
            DashCommand::Quit => {
                console.info("Goodbye!");
                break;
            }
            DashCommand::Help => print_help(&console),
            DashCommand::Refresh => match fetch_document(&console, backend).await {
                Ok(document) => console.print_dashboard(&render_document(&document)),
                Err(_) => console.error(OFFLINE_MESSAGE),
            },
            DashCommand::Forget(request) => {
                let confirmed = console
                    .confirm(&format!("Forget {}?", request.describe()))
                    .unwrap_or(false);
                if !confirmed {
                    console.info("Aborted, nothing forgotten");
                    continue;
                }

                match forget_and_refresh(backend, &request).await {
                    Ok(document) => {
                        console.success(&format!("Forgot {}", request.describe()));
                        console.print_dashboard(&render_document(&document));
                    }
                    // Keep the last rendered snapshot on screen
                    Err(e) => console.error(&format!("Forget failed: {e}")),
                }
            }
            DashCommand::Unknown(message) => {
                console.warn(&message);
                console.warn("Type 'help' for the command list.");
            }
        }
    }

    Ok(())
}

/// Forget one item, then fetch the post-deletion snapshot.
///
/// A failed forget returns without fetching so the caller keeps showing
/// the last known snapshot.
async fn forget_and_refresh(
    backend: &dyn MemoryBackend,
    request: &ForgetRequest,
) -> MemdashResult<MemoryDocument> {
    backend.forget(request).await?;
    backend.fetch_memory().await
}

/// Parse one line of dashboard input.
fn parse_command(input: &str) -> DashCommand {
    let mut tokens = input.split_whitespace();
    let head = match tokens.next() {
        Some(head) => head.to_lowercase(),
        None => return DashCommand::Unknown("Empty command".to_string()),
    };

    match head.as_str() {
        "refresh" | "r" => DashCommand::Refresh,
        "help" | "h" | "?" => DashCommand::Help,
        "quit" | "exit" | "q" => DashCommand::Quit,
        "forget" => parse_forget(&tokens.collect::<Vec<_>>()),
        other => DashCommand::Unknown(format!("Unknown command '{other}'")),
    }
}

fn parse_forget(args: &[&str]) -> DashCommand {
    let (category, rest) = match args.split_first() {
        Some((category, rest)) => (category.to_lowercase(), rest),
        None => {
            return DashCommand::Unknown(
                "Usage: forget <profile|prefs|note> <key or index>".to_string(),
            )
        }
    };

    match category.as_str() {
        "profile" | "prefs" | "preferences" => {
            if rest.is_empty() {
                return DashCommand::Unknown(format!("Usage: forget {category} <key>"));
            }
            let target = if category == "profile" {
                ForgetCategory::Profile
            } else {
                ForgetCategory::Preferences
            };
            // Keys may contain spaces
            DashCommand::Forget(ForgetRequest::key(target, rest.join(" ")))
        }
        "note" | "notes" => match rest {
            [index] => match index.parse::<usize>() {
                Ok(index) => DashCommand::Forget(ForgetRequest::note_index(index)),
                Err(_) => DashCommand::Unknown(format!("'{index}' is not a note index")),
            },
            _ => DashCommand::Unknown("Usage: forget note <index>".to_string()),
        },
        other => DashCommand::Unknown(format!(
            "Unknown category '{other}'; expected profile, prefs, or note"
        )),
    }
}

/// Print help information
fn print_help(console: &CliConsole) {
    console.print_header("Available Commands");
    println!("  refresh, r             - Fetch the memory document again");
    println!("  forget profile <key>   - Forget a profile entry");
    println!("  forget prefs <key>     - Forget a preference entry");
    println!("  forget note <index>    - Forget the note at an index");
    println!("  help, h, ?             - Show this help message");
    println!("  quit, exit, q          - Leave the dashboard");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use memdash_core::error::MemdashError;
    use memdash_core::memory::ForgetAck;
    use mockall::mock;
    use serde_json::json;

    mock! {
        Backend {}

        #[async_trait]
        impl MemoryBackend for Backend {
            async fn fetch_memory(&self) -> MemdashResult<MemoryDocument>;
            async fn forget(&self, request: &ForgetRequest) -> MemdashResult<ForgetAck>;
        }
    }

    fn sample_document() -> MemoryDocument {
        serde_json::from_value(json!({
            "profile": { "name": "Ada" },
            "notes": [{ "content": "Likes Rust" }]
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_refresh_and_quit() {
        assert_eq!(parse_command("refresh"), DashCommand::Refresh);
        assert_eq!(parse_command("r"), DashCommand::Refresh);
        assert_eq!(parse_command("quit"), DashCommand::Quit);
        assert_eq!(parse_command("EXIT"), DashCommand::Quit);
        assert_eq!(parse_command("help"), DashCommand::Help);
    }

    #[test]
    fn test_parse_forget_profile_key() {
        assert_eq!(
            parse_command("forget profile name"),
            DashCommand::Forget(ForgetRequest::key(ForgetCategory::Profile, "name"))
        );
    }

    #[test]
    fn test_parse_forget_key_with_spaces() {
        assert_eq!(
            parse_command("forget prefs favorite editor"),
            DashCommand::Forget(ForgetRequest::key(
                ForgetCategory::Preferences,
                "favorite editor"
            ))
        );
    }

    #[test]
    fn test_parse_forget_note_index() {
        assert_eq!(
            parse_command("forget note 2"),
            DashCommand::Forget(ForgetRequest::note_index(2))
        );
        assert_eq!(
            parse_command("forget notes 0"),
            DashCommand::Forget(ForgetRequest::note_index(0))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(parse_command("forget"), DashCommand::Unknown(_)));
        assert!(matches!(
            parse_command("forget profile"),
            DashCommand::Unknown(_)
        ));
        assert!(matches!(
            parse_command("forget note two"),
            DashCommand::Unknown(_)
        ));
        assert!(matches!(
            parse_command("forget wishes x"),
            DashCommand::Unknown(_)
        ));
        assert!(matches!(parse_command("frgt"), DashCommand::Unknown(_)));
    }

    #[tokio::test]
    async fn test_forget_triggers_exactly_one_refetch() {
        let mut backend = MockBackend::new();
        backend
            .expect_forget()
            .withf(|request| request.index == Some(0))
            .times(1)
            .returning(|_| Ok(ForgetAck::default()));
        backend
            .expect_fetch_memory()
            .times(1)
            .returning(|| Ok(sample_document()));

        let request = ForgetRequest::note_index(0);
        let document = forget_and_refresh(&backend, &request).await.unwrap();
        assert_eq!(document.profile.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_forget_skips_refetch() {
        let mut backend = MockBackend::new();
        backend
            .expect_forget()
            .times(1)
            .returning(|_| Err(MemdashError::backend(404, "no such note")));
        backend.expect_fetch_memory().times(0);

        let request = ForgetRequest::note_index(9);
        let result = forget_and_refresh(&backend, &request).await;
        assert!(matches!(
            result,
            Err(MemdashError::Backend { status: 404, .. })
        ));
    }
}
