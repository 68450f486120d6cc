use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::{debug, error};

use booking_form_cell::{BookingWidget, Dispatch, WidgetOutcome};

use crate::commands::{self, Command};
use crate::terminal;

/// Feeds commands from `input` to the widget until `quit` or end of input.
///
/// Events are dispatched in input order; slot loads and submissions then
/// run in the background so the prompt stays responsive. All of them are
/// awaited before returning, so every outcome reaches the view.
pub async fn run_session<R>(widget: Arc<BookingWidget>, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut in_flight: JoinSet<WidgetOutcome> = JoinSet::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        while let Some(finished) = in_flight.try_join_next() {
            log_finished(finished);
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", commands::HELP),
            Ok(Command::Show) => terminal::print_form(&widget.form()),
            Ok(Command::Event(event)) => {
                if let Dispatch::Pending(work) = widget.dispatch(event) {
                    let widget = widget.clone();
                    in_flight.spawn(async move { widget.run(work).await });
                }
            }
            Ok(Command::Empty) => {}
            Err(e) => println!("{}", e),
        }
    }

    if !in_flight.is_empty() {
        debug!("Waiting for {} outstanding requests", in_flight.len());
    }
    while let Some(finished) = in_flight.join_next().await {
        log_finished(finished);
    }

    Ok(())
}

fn log_finished(finished: Result<WidgetOutcome, tokio::task::JoinError>) {
    match finished {
        Ok(outcome) => debug!("Background work finished: {:?}", outcome),
        Err(e) => error!("Background work failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use booking_form_cell::test_utils::{RecordingView, StubBookingApi};
    use booking_form_cell::{SlotSelect, MSG_CONNECTION_FAILED};
    use shared_config::AppConfig;
    use shared_models::{AppError, StatusMessage};
    use shared_utils::SystemClock;

    const BOOKING_SCRIPT: &str = "\
set name Asha Verma
set phone 9876543210
set address 12 Lake Road
set doctor A
set service General Checkup
set date 2099-01-01
set time 08:30
submit
";

    fn widget_for(api: Arc<StubBookingApi>, view: Arc<RecordingView>) -> Arc<BookingWidget> {
        Arc::new(BookingWidget::new(
            &AppConfig::new("http://localhost", 300.0),
            api,
            view,
            Arc::new(SystemClock),
            None,
        ))
    }

    #[tokio::test]
    async fn failed_booking_is_reported_before_session_ends() {
        let api = Arc::new(
            StubBookingApi::new()
                .with_booking_response(Err(AppError::ExternalService("connection refused".into()))),
        );
        let gate = api.gate_bookings();
        let view = RecordingView::new();

        tokio::spawn(async move {
            tokio::task::yield_now().await;
            gate.notify_one();
        });
        run_session(widget_for(api.clone(), view.clone()), BOOKING_SCRIPT.as_bytes())
            .await
            .unwrap();

        assert_eq!(api.bookings().len(), 1);
        assert_eq!(view.status(), Some(StatusMessage::error(MSG_CONNECTION_FAILED)));
    }

    #[tokio::test]
    async fn submit_sees_every_earlier_field() {
        let api = Arc::new(StubBookingApi::new().with_slots("2099-01-01", ["08:30"]));
        let view = RecordingView::new();

        run_session(widget_for(api.clone(), view), BOOKING_SCRIPT.as_bytes())
            .await
            .unwrap();

        let sent = api.bookings();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Asha Verma");
        assert_eq!(sent[0].address, "12 Lake Road");
        assert_eq!(sent[0].date, "2099-01-01");
        assert_eq!(sent[0].time, "08:30");
    }

    #[tokio::test]
    async fn slot_load_finishes_before_session_ends() {
        let api = Arc::new(StubBookingApi::new().with_slots("2099-01-01", ["08:00", "08:30"]));
        let gate = api.gate("2099-01-01");
        let view = RecordingView::new();

        tokio::spawn(async move {
            tokio::task::yield_now().await;
            gate.notify_one();
        });
        run_session(
            widget_for(api, view.clone()),
            "set doctor A\nset date 2099-01-01\n".as_bytes(),
        )
        .await
        .unwrap();

        assert_matches!(
            view.slots(),
            Some(SlotSelect::Options(ref options)) if options.len() == 2
        );
    }
}
