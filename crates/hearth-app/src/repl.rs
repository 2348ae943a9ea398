//! Line-oriented chat loop against a live agent.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use hearth_agent::{ConversationAgent, ConversationInput};
use hearth_common::{ConversationId, Result};

/// Read utterances from stdin until EOF or `/quit`. `/new` drops the
/// current conversation id so the next line starts over.
pub async fn run(agent: Arc<dyn ConversationAgent>, language: String) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut conversation_id: Option<ConversationId> = None;

    println!("hearth chat: /new starts over, /quit exits");

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(e.into()),
        };

        let text = line.trim();
        match text {
            "" => continue,
            "/quit" => break,
            "/new" => {
                conversation_id = None;
                println!("(new conversation)");
                continue;
            }
            _ => {}
        }

        let result = agent
            .process(ConversationInput {
                text: text.to_string(),
                conversation_id: conversation_id.clone(),
                language: language.clone(),
            })
            .await;

        conversation_id = Some(result.conversation_id);
        println!("{}", result.reply.speech());
    }

    Ok(())
}
