use codesnip_comment::{comment_code, CommentServiceClient, CommentTemplate};
use codesnip_types::AppEvent;
use kanal::AsyncSender;

/// Send extracted code to the remote comment service and deliver the
/// transformed text. Failures become status messages, never a crash.
pub async fn handle_comment_request(
    code: String,
    client: Option<&CommentServiceClient>,
    template: &CommentTemplate,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(client) = client else {
        tracing::warn!("comment service disabled");
        let _ = app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                status: "Comment service disabled".to_string(),
                capturing: false,
            })
            .await;
        return Ok(());
    };

    match comment_code(client, template, &code).await {
        Ok(commented) => {
            let _ = app_to_ui_tx
                .send(AppEvent::ShowCommented {
                    original: code,
                    commented,
                })
                .await;
        }
        Err(e) => {
            tracing::warn!("comment request failed: {e}");
            let _ = app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    status: format!("Comment failed: {e}"),
                    capturing: false,
                })
                .await;
        }
    }

    Ok(())
}
