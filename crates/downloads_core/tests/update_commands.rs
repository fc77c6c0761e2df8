use downloads_core::{update, AppState, Effect, ItemSnapshot, Msg, TaskEvent, TaskId, TaskState};

fn with_task(id: TaskId, state: TaskState) -> AppState {
    let msg = Msg::TaskEvent(TaskEvent {
        item_id: id,
        state,
        downloaded_count: 0,
        total_count: 0,
        snapshot: ItemSnapshot {
            id,
            ..ItemSnapshot::default()
        },
    });
    update(AppState::new(), msg).0
}

#[test]
fn toggle_pauses_active_tasks() {
    for state in [TaskState::Downloading, TaskState::Pending] {
        let (_, effects) = update(with_task(1, state), Msg::TaskActivated { id: 1 });
        assert_eq!(effects, vec![Effect::PauseTask { id: 1 }]);
    }
}

#[test]
fn toggle_resumes_everything_else() {
    for state in [TaskState::Paused, TaskState::Failed] {
        let (_, effects) = update(with_task(1, state), Msg::TaskActivated { id: 1 });
        assert_eq!(effects, vec![Effect::ResumeTask { id: 1 }]);
    }
}

#[test]
fn toggle_on_unknown_task_does_nothing() {
    let (_, effects) = update(AppState::new(), Msg::TaskActivated { id: 42 });
    assert!(effects.is_empty());
}

#[test]
fn download_of_paused_task_resumes_without_refetch() {
    let (_, effects) = update(
        with_task(5, TaskState::Paused),
        Msg::DownloadClicked {
            id: 5,
            already_downloaded: false,
        },
    );
    assert_eq!(effects, vec![Effect::ResumeTask { id: 5 }]);
}

#[test]
fn download_of_new_or_finished_task_creates() {
    let (_, effects) = update(
        AppState::new(),
        Msg::DownloadClicked {
            id: 5,
            already_downloaded: true,
        },
    );
    assert_eq!(effects, vec![Effect::CreateTask { id: 5 }]);

    for state in [
        TaskState::Failed,
        TaskState::Completed,
        TaskState::Cancelled,
        TaskState::Downloading,
    ] {
        let (_, effects) = update(
            with_task(5, state),
            Msg::DownloadClicked {
                id: 5,
                already_downloaded: false,
            },
        );
        assert_eq!(effects, vec![Effect::CreateTask { id: 5 }]);
    }
}

#[test]
fn refresh_requests_downloaded_list() {
    let (next, effects) = update(AppState::new(), Msg::RefreshDownloadedClicked);
    assert_eq!(effects, vec![Effect::RefreshDownloaded]);
    assert_eq!(next, AppState::new());
}
