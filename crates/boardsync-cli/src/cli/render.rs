use boardsync::commands::{CmdMessage, MessageLevel};
use boardsync::model::Document;
use console::style;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

fn render_message(message: &CmdMessage) -> String {
    let content = message.content.as_str();
    match message.level {
        MessageLevel::Info => style(content).dim().to_string(),
        MessageLevel::Success => style(content).green().to_string(),
        MessageLevel::Warning => style(content).yellow().to_string(),
    }
}

pub fn summary(doc: &Document) -> CmdMessage {
    CmdMessage::info(format!(
        "{} elements, {} logs, {} links on board",
        doc.elements.len(),
        doc.logs.len(),
        doc.links.len()
    ))
}
