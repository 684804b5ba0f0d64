//! Tests for the persistence synchronizer.
//!
//! A scripted store double records every remote call, so the tests can
//! assert on issuance order and on the fire-and-forget failure policy.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use excuseme::{
    Board, GameId, GameRecord, GameSession, GameStore, Player, RemoteError, Synchronizer,
};

#[derive(Debug, Clone, Default)]
struct ScriptedStore {
    fail_create: bool,
    fail_update: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedStore {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait_for_calls(&self, count: usize) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while self.calls.lock().unwrap().len() < count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("expected remote calls were not issued in time");
    }
}

#[async_trait]
impl GameStore for ScriptedStore {
    async fn create_game(&self, first_player: Player) -> Result<GameId, RemoteError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("create {}", first_player));
        if self.fail_create {
            return Err(RemoteError::new("backend down"));
        }
        Ok("game-1".to_string())
    }

    async fn update_game(
        &self,
        game_id: &str,
        board: &Board,
        player: Player,
    ) -> Result<GameRecord, RemoteError> {
        let filled = board.cells().iter().flatten().count();
        self.calls
            .lock()
            .unwrap()
            .push(format!("update {} {} {}", game_id, player, filled));
        if self.fail_update {
            return Err(RemoteError::new("update refused"));
        }
        Ok(GameRecord {
            id: game_id.to_string(),
            board: board.clone(),
            current_player: player.opponent(),
            status: "playing".to_string(),
            winner: None,
        })
    }
}

#[tokio::test]
async fn test_failed_create_leaves_session_unmirrored_and_playable() {
    let store = ScriptedStore {
        fail_create: true,
        ..Default::default()
    };
    let handle = Synchronizer::spawn(store.clone());
    let mut rx = handle.subscribe();
    let mut session = GameSession::new(handle);

    session.start();
    // Local play must not be blocked by the remote outage.
    session.play(4).expect("local move should succeed");

    rx.wait_for(|s| s.last_error().is_some())
        .await
        .expect("sync worker dropped status channel");
    assert!(session.sync_status().remote_id().is_none());

    // Give the worker time to (not) issue the update for the move.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(store.calls(), vec!["create X".to_string()]);
}

#[tokio::test]
async fn test_successful_create_mirrors_moves_in_order() {
    let store = ScriptedStore::default();
    let handle = Synchronizer::spawn(store.clone());
    let mut rx = handle.subscribe();
    let mut session = GameSession::new(handle);

    session.start();
    rx.wait_for(|s| s.remote_id().is_some())
        .await
        .expect("sync worker dropped status channel");

    session.play(0).unwrap();
    session.play(3).unwrap();
    session.play(1).unwrap();

    store.wait_for_calls(4).await;
    assert_eq!(
        store.calls(),
        vec![
            "create X".to_string(),
            "update game-1 X 1".to_string(),
            "update game-1 O 2".to_string(),
            "update game-1 X 3".to_string(),
        ]
    );
    assert_eq!(
        session.sync_status().remote_id().as_deref(),
        Some("game-1")
    );
}

#[tokio::test]
async fn test_update_failure_is_dropped_and_does_not_stop_later_updates() {
    let store = ScriptedStore {
        fail_update: true,
        ..Default::default()
    };
    let handle = Synchronizer::spawn(store.clone());
    let mut rx = handle.subscribe();
    let mut session = GameSession::new(handle);

    session.start();
    rx.wait_for(|s| s.remote_id().is_some())
        .await
        .expect("sync worker dropped status channel");

    session.play(0).unwrap();
    rx.wait_for(|s| s.last_error().is_some())
        .await
        .expect("sync worker dropped status channel");

    session.play(1).unwrap();
    store.wait_for_calls(3).await;

    // The failed update neither rolled anything back nor unmirrored
    // the session.
    assert_eq!(
        session.sync_status().remote_id().as_deref(),
        Some("game-1")
    );
    assert_eq!(session.state().board().cells().iter().flatten().count(), 2);
}

#[tokio::test]
async fn test_moves_without_a_started_session_are_not_mirrored() {
    let store = ScriptedStore::default();
    let handle = Synchronizer::spawn(store.clone());
    let mut session = GameSession::new(handle);

    // No start(): nothing was ever created remotely.
    session.play(4).unwrap();
    session.play(0).unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.calls().is_empty());
    assert!(session.sync_status().remote_id().is_none());
}
