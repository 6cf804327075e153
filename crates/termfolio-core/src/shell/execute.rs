//! Command execution logic.
//!
//! Every handler is a plain function from a parsed [`Command`] and an
//! [`ExecContext`] to a [`CommandResult`]. Failures come back as
//! [`CommandError`]; rendering them is the dispatcher's job.

use rand::{Rng, RngCore};

use crate::clock::Clock;
use crate::config::{
    timings, HELP_HINT, HELP_TEXT, HISTORY_DISPLAY_LIMIT, HOME_PATH, MANIFEST, MS_PER_DAY,
    NEOFETCH_TEXT, TREE_TEXT, UPTIME_EPOCH_MS, USER_NAME, USER_TAGLINE,
};
use crate::error::CommandError;
use crate::history::HistoryBuffer;
use crate::models::{OutputLine, Section};

use super::{Command, CommandKind, CommandResult};

/// Read-only session state a command may consult, plus the ping RNG.
pub struct ExecContext<'a> {
    pub history: &'a HistoryBuffer,
    /// Currently active section (for `pwd`).
    pub section: Section,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngCore,
}

/// Execute a parsed command.
pub fn execute_command(
    cmd: &Command,
    ctx: &mut ExecContext<'_>,
) -> Result<CommandResult, CommandError> {
    let result = match cmd.kind {
        CommandKind::Help => CommandResult::output(help()),
        CommandKind::Clear => CommandResult::cleared(vec![]),
        CommandKind::Reset => reset(),
        CommandKind::Ls => CommandResult::output(ls()),
        CommandKind::Tree => CommandResult::output(TREE_TEXT.lines().map(OutputLine::info).collect()),
        CommandKind::Find => find(cmd.required_arg("find <filename>")?)?,
        CommandKind::Grep => {
            cmd.required_arg("grep <search_text>")?;
            grep(&cmd.joined_args())
        }
        CommandKind::Cd => cd(cmd.required_arg("cd <directory>")?)?,
        CommandKind::Cat => cat(cmd.required_arg("cat <filename>")?)?,
        CommandKind::Pwd => CommandResult::output(vec![OutputLine::info(format!(
            "{}/{}",
            HOME_PATH, ctx.section
        ))]),
        CommandKind::Whoami => CommandResult::output(vec![
            OutputLine::success(USER_NAME),
            OutputLine::comment(USER_TAGLINE),
        ]),
        CommandKind::Date => {
            CommandResult::output(vec![OutputLine::info(ctx.clock.local_date_string())])
        }
        CommandKind::Uptime => uptime(ctx.clock),
        CommandKind::Ps => CommandResult::output(vec![
            OutputLine::highlight("PID    COMMAND"),
            OutputLine::info("1      /sbin/init"),
            OutputLine::success("42     portfolio.wasm"),
            OutputLine::info("128    terminal-emulator"),
            OutputLine::info("256    github-api-client"),
            OutputLine::info("512    websocket-server"),
        ]),
        CommandKind::Top => CommandResult::output(vec![
            OutputLine::highlight("top - Interactive process viewer"),
            OutputLine::info("CPU: 15.2% user, 5.8% system, 79.0% idle"),
            OutputLine::info("Memory: 2.1GB used, 5.9GB free"),
            OutputLine::empty(),
            OutputLine::highlight("PID  CPU%  MEM%  COMMAND"),
            OutputLine::success("42   12.5  8.2   portfolio.wasm"),
            OutputLine::info("128  5.1   3.4   terminal-emulator"),
        ]),
        CommandKind::Neofetch => {
            CommandResult::output(NEOFETCH_TEXT.lines().map(OutputLine::info).collect())
        }
        CommandKind::History => CommandResult::output(history(ctx.history)),
        CommandKind::Echo => CommandResult::output(vec![OutputLine::info(cmd.joined_args())]),
        CommandKind::Vim => editor("vim: command-line text editor"),
        CommandKind::Nano => editor("nano: simple text editor"),
        CommandKind::Ssh => CommandResult::output(vec![
            OutputLine::highlight("SSH connections:"),
            OutputLine::success("github.com:22 - Active"),
            OutputLine::success("gitlab.com:22 - Active"),
            OutputLine::info("mastodon.social:443 - Connected"),
        ]),
        CommandKind::Chmod => CommandResult::output(vec![
            OutputLine::success("File permissions already optimal"),
            OutputLine::comment("chmod: no changes needed"),
        ]),
        CommandKind::Sudo => CommandResult::output(vec![
            OutputLine::warning(format!("{} is already in the sudoers file", USER_NAME)),
            OutputLine::comment("This incident will be reported"),
        ]),
        CommandKind::Curl => curl(cmd.required_arg("curl <url>")?),
        CommandKind::Ping => ping(cmd.required_arg("ping <hostname>")?, ctx.rng),
        CommandKind::Exit => CommandResult::output(vec![
            OutputLine::warning("There is no exit from the digital realm..."),
            OutputLine::comment("Use Ctrl+W to close the window instead"),
        ]),
    };
    Ok(result)
}

/// `reset` and Ctrl+R.
pub fn reset() -> CommandResult {
    CommandResult::cleared(vec![
        OutputLine::success("Terminal reset"),
        OutputLine::comment(HELP_HINT),
    ])
}

/// Ctrl+C.
pub fn interrupt() -> Vec<OutputLine> {
    vec![
        OutputLine::warning("^C"),
        OutputLine::comment("Command interrupted"),
    ]
}

fn help() -> Vec<OutputLine> {
    HELP_TEXT
        .lines()
        .map(|line| {
            if line.contains(':') {
                OutputLine::highlight(line)
            } else {
                OutputLine::comment(line)
            }
        })
        .collect()
}

fn ls() -> Vec<OutputLine> {
    let entry = |mode: &str, size: u32, name: &str| {
        format!("{}  1 {}  staff  {:>4} Jan  1 12:00 {}", mode, USER_NAME, size, name)
    };
    let mut lines = vec![OutputLine::comment(format!("total {}", MANIFEST.len()))];
    for name in MANIFEST {
        let line = match name {
            "about.md" => OutputLine::info(entry("-rw-r--r--", 1024, name)),
            "terminal.js" => OutputLine::success(entry("-rwxr-xr-x", 2048, name)),
            dir => OutputLine::info(entry("drwxr-xr-x", 512, dir)),
        };
        lines.push(line);
    }
    lines
}

fn find(name: &str) -> Result<CommandResult, CommandError> {
    let needle = name.to_lowercase();
    let lines: Vec<_> = MANIFEST
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .map(|entry| OutputLine::success(format!("./portfolio/{}", entry)))
        .collect();
    if lines.is_empty() {
        return Err(CommandError::NoMatches(name.to_string()));
    }
    Ok(CommandResult::output(lines))
}

fn grep(text: &str) -> CommandResult {
    CommandResult::output(vec![
        OutputLine::info(format!("Searching for: \"{}\"", text)),
        OutputLine::success("about.md:1: Digital craftsperson & system architect"),
        OutputLine::success("welcome/intro.txt:3: Interactive terminal portfolio"),
    ])
}

fn cd(dir: &str) -> Result<CommandResult, CommandError> {
    let section = match dir {
        ".." | "~" | "/" => Section::Welcome,
        other => other
            .parse::<Section>()
            .map_err(|_| CommandError::DirectoryNotFound(dir.to_string()))?,
    };
    Ok(CommandResult::navigate(
        section,
        OutputLine::success(format!("Changed to: {}", section)),
    ))
}

fn cat(file: &str) -> Result<CommandResult, CommandError> {
    let section = match file {
        "welcome.txt" => Section::Welcome,
        "about.md" => Section::About,
        "projects" => Section::Projects,
        "connect" => Section::Connect,
        "terminal.js" => Section::Terminal,
        _ => return Err(CommandError::FileNotFound(file.to_string())),
    };
    Ok(CommandResult::navigate(
        section,
        OutputLine::success(format!("Displaying: {}", file)),
    ))
}

fn uptime(clock: &dyn Clock) -> CommandResult {
    let days = ((clock.now_ms() - UPTIME_EPOCH_MS) / MS_PER_DAY).floor().max(0.0) as u64;
    CommandResult::output(vec![
        OutputLine::info(format!("System uptime: {} days", days)),
        OutputLine::comment("Load average: 0.42, 0.38, 0.35"),
    ])
}

fn history(history: &HistoryBuffer) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::highlight("Command history:")];
    lines.extend(
        history
            .recent(HISTORY_DISPLAY_LIMIT)
            .enumerate()
            .map(|(i, line)| OutputLine::comment(format!("{}  {}", i + 1, line))),
    );
    lines
}

fn editor(banner: &str) -> CommandResult {
    CommandResult::output(vec![
        OutputLine::info(banner),
        OutputLine::comment("Use file explorer or commands instead"),
    ])
}

fn curl(url: &str) -> CommandResult {
    let response = if url.contains("github") {
        "200 OK - GitHub API response received"
    } else {
        "Connection established"
    };
    CommandResult::output(vec![OutputLine::info(format!("Fetching: {}", url))])
        .schedule(timings::CURL_RESPONSE_MS, OutputLine::success(response))
}

fn ping(host: &str, rng: &mut dyn RngCore) -> CommandResult {
    let mut result = CommandResult::output(vec![OutputLine::info(format!("PING {}:", host))]);
    for seq in 1..=timings::PING_COUNT {
        let latency: f64 = rng.gen_range(timings::PING_LATENCY_MS);
        result = result.schedule(
            seq * timings::PING_INTERVAL_MS,
            OutputLine::success(format!(
                "64 bytes from {}: icmp_seq={} time={:.1}ms",
                host, seq, latency
            )),
        );
    }
    result
}
