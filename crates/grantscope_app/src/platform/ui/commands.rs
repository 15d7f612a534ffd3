use grantscope_core::{Msg, PayoutKind};

pub const HELP_TEXT: &str = "\
Commands:
  q [text]            set or clear the search text
  prod <tag>          toggle a producer-type filter
  cat <tag>           toggle a category filter
  rolling on|off      only rolling programs
  nomatch on|off      only programs without a match requirement
  open on|off         only programs open now
  due30 on|off        only programs due within 30 days
  payout direct|reimbursement|any
  share <slug>        share one card
  copy <slug>         copy one card link
  share-site          share the whole guide
  copy-site           copy the guide link
  goto <hash>         jump to a deep-link target, e.g. #cover-crop-cost-share
  help                show this help
  quit                exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Update(Msg),
    Help,
    Quit,
    Unknown(String),
}

/// Maps one input line onto a core message or a loop-level command.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head {
        "" => Command::Update(Msg::NoOp),
        "q" => Command::Update(Msg::QueryChanged(rest.to_string())),
        "prod" if !rest.is_empty() => Command::Update(Msg::ProducerToggled(rest.to_string())),
        "cat" if !rest.is_empty() => Command::Update(Msg::CategoryToggled(rest.to_string())),
        "rolling" => match on_off(rest) {
            Some(on) => Command::Update(Msg::RollingOnlySet(on)),
            None => Command::Unknown(trimmed.to_string()),
        },
        "nomatch" => match on_off(rest) {
            Some(on) => Command::Update(Msg::NoMatchOnlySet(on)),
            None => Command::Unknown(trimmed.to_string()),
        },
        "open" => match on_off(rest) {
            Some(on) => Command::Update(Msg::OpenNowSet(on)),
            None => Command::Unknown(trimmed.to_string()),
        },
        "due30" => match on_off(rest) {
            Some(on) => Command::Update(Msg::DueSoonSet(on)),
            None => Command::Unknown(trimmed.to_string()),
        },
        "payout" => match rest {
            "any" => Command::Update(Msg::PayoutSelected(None)),
            _ => match PayoutKind::parse(rest) {
                Some(kind) => Command::Update(Msg::PayoutSelected(Some(kind))),
                None => Command::Unknown(trimmed.to_string()),
            },
        },
        "share" if !rest.is_empty() => Command::Update(Msg::ShareRequested {
            slug: rest.to_string(),
        }),
        "copy" if !rest.is_empty() => Command::Update(Msg::CopyRequested {
            slug: rest.to_string(),
        }),
        "share-site" => Command::Update(Msg::SiteShareRequested),
        "copy-site" => Command::Update(Msg::SiteCopyRequested),
        "goto" if !rest.is_empty() => Command::Update(Msg::HashChanged(rest.to_string())),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn on_off(value: &str) -> Option<bool> {
    match value {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}
