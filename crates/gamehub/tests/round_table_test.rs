//! Timed round tests driven on a paused tokio clock.

use gamehub::{
    MemoryLedger, Move, Notification, NotificationKind, Outcome, PlayError, RoundOrchestrator,
    RoundPhase, ScriptedOpponent, Table,
};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use tokio::sync::mpsc;

fn table(
    connected: bool,
    balance: u64,
    script: Vec<Move>,
) -> (Table, mpsc::UnboundedReceiver<Notification>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let orchestrator = RoundOrchestrator::new(
        Arc::new(AtomicBool::new(connected)),
        Box::new(MemoryLedger::new(balance)),
        Box::new(ScriptedOpponent::new(script)),
        Arc::new(tx),
    );
    (Table::new(orchestrator), rx)
}

#[tokio::test(start_paused = true)]
async fn test_rock_beats_scissors_end_to_end() {
    let (table, mut rx) = table(true, 100, vec![Move::Scissors]);

    let handle = table.play(Move::Rock).expect("accepted");
    assert_eq!(handle.ticket().delay(), Duration::from_millis(2000));

    let snapshot = table.snapshot();
    assert!(snapshot.phase.is_pending());
    assert_eq!(snapshot.balance, 99);
    assert_eq!(snapshot.stats.total(), 0);

    let report = handle.finished().await.expect("revealed");
    assert_eq!(report.outcome(), Outcome::Win);
    assert_eq!(report.balance, 99);
    assert_eq!(*report.stats.wins(), 1);

    let notification = rx.recv().await.expect("result notification");
    assert_eq!(*notification.kind(), NotificationKind::Info);
    assert_eq!(notification.message(), "You: Rock - Computer: Scissors");
}

#[tokio::test(start_paused = true)]
async fn test_draw_end_to_end() {
    let (table, _rx) = table(true, 100, vec![Move::Rock]);

    let report = table
        .play(Move::Rock)
        .expect("accepted")
        .finished()
        .await
        .expect("revealed");

    assert_eq!(report.outcome(), Outcome::Draw);
    assert_eq!(*report.stats.draws(), 1);
    assert_eq!(report.balance, 99);
}

#[tokio::test(start_paused = true)]
async fn test_reveal_waits_for_delay() {
    let (table, _rx) = table(true, 10, vec![Move::Paper]);
    let handle = table.play(Move::Rock).unwrap();

    tokio::time::advance(Duration::from_millis(1999)).await;
    tokio::task::yield_now().await;
    assert!(table.snapshot().phase.is_pending());

    let report = handle.finished().await.unwrap();
    assert_eq!(report.outcome(), Outcome::Lose);
    assert!(matches!(table.snapshot().phase, RoundPhase::Resolved(_)));
}

#[tokio::test(start_paused = true)]
async fn test_second_play_while_pending_is_rejected() {
    let (table, _rx) = table(true, 100, vec![Move::Scissors, Move::Rock]);

    let first = table.play(Move::Rock).unwrap();
    let second = table.play(Move::Paper);
    assert!(matches!(second, Err(PlayError::RoundInProgress)));
    assert_eq!(table.snapshot().balance, 99);

    let report = first.finished().await.unwrap();
    assert_eq!(report.stats.total(), 1);
    assert_eq!(report.balance, 99);

    // Slot is free again once the reveal lands.
    let third = table.play(Move::Paper).unwrap().finished().await.unwrap();
    assert_eq!(third.outcome(), Outcome::Win);
    assert_eq!(third.balance, 98);
}

#[tokio::test(start_paused = true)]
async fn test_rejections_leave_state_untouched() {
    let (offline, mut rx) = table(false, 100, vec![Move::Rock]);
    assert!(matches!(offline.play(Move::Rock), Err(PlayError::NotConnected)));
    let snapshot = offline.snapshot();
    assert_eq!(snapshot.balance, 100);
    assert_eq!(snapshot.stats.total(), 0);
    assert_eq!(snapshot.phase, RoundPhase::Idle);
    assert_eq!(*rx.recv().await.unwrap().kind(), NotificationKind::Error);

    let (broke, _rx) = table(true, 0, vec![Move::Rock]);
    assert!(matches!(
        broke.play(Move::Rock),
        Err(PlayError::InsufficientBalance { balance: 0 })
    ));
    assert_eq!(broke.snapshot().stats.total(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_table_discards_reveal() {
    let (table, mut rx) = table(true, 100, vec![Move::Scissors]);
    let handle = table.play(Move::Rock).unwrap();
    drop(table);

    assert!(handle.finished().await.is_none());
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_reset_only_after_reveal() {
    let (table, _rx) = table(true, 100, vec![Move::Rock]);
    let handle = table.play(Move::Scissors).unwrap();
    assert_eq!(table.reset(), Err(PlayError::RoundInProgress));

    handle.finished().await.unwrap();
    assert_eq!(table.reset(), Ok(()));
    let snapshot = table.snapshot();
    assert_eq!(snapshot.phase, RoundPhase::Idle);
    assert_eq!(*snapshot.stats.losses(), 1);
}
