use colored::Colorize;
use qualifier::api::{CmdMessage, CmdResult, MessageLevel};

const EMPTY_LIST: &str = "No quotes yet.";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_result(result: &CmdResult) {
    if let Some(rendered) = &result.rendered {
        if result.listed_quotes.is_empty() {
            println!("{}", EMPTY_LIST.dimmed());
        } else {
            // Printed verbatim, it is meant to be pasted as markdown
            println!("{}", rendered);
        }
    }
    print_messages(&result.messages);
}
