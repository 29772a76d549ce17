//! End-to-end scenarios over the task collection, completed queue and urgent stack
mod common;

use common::{active_names, create_test_task};
use task_tracker::*;

// 日付ソートと完了処理のシナリオテスト
// 同日のタスクが追加順を保ち、完了したタスクが各構造に正しく反映されることを確認
#[test]
fn test_sort_then_complete_scenario() {
    let mut tasks = TaskCollection::new();
    let mut completed = CompletedQueue::new();
    let mut urgent = UrgentStack::new();

    let a = tasks.add_task(create_test_task("A", (1, 1, 2025), true, Category::Work));
    urgent.push(&tasks, a);
    let b = tasks.add_task(create_test_task("B", (5, 6, 2024), false, Category::Study));
    urgent.push(&tasks, b);
    let c = tasks.add_task(create_test_task("C", (5, 6, 2024), true, Category::Personal));
    urgent.push(&tasks, c);

    tasks.sort_by_due_date();
    let order: Vec<TaskId> = tasks.active_tasks().map(|(id, _)| id).collect();
    assert_eq!(order, vec![b, c, a]);

    let first = tasks.active_task_by_ordinal(1).unwrap();
    assert_eq!(first, b);
    completed.enqueue(&mut tasks, first).unwrap();
    tasks.remove_task(first).unwrap();

    let done: Vec<&str> = completed.iter(&tasks).map(|t| t.name.as_str()).collect();
    assert_eq!(done, vec!["B"]);

    assert_eq!(tasks.active_task_by_ordinal(1), Some(c));
    assert_eq!(tasks.active_task_by_ordinal(2), Some(a));
    assert!(tasks.active_task_by_ordinal(3).is_none());

    // B was never urgent, so the stack holds A then C
    assert_eq!(urgent.len(), 2);
    let shown: Vec<&str> = urgent.displayed(&tasks).map(|t| t.name.as_str()).collect();
    assert_eq!(shown, vec!["A", "C"]);
}

// 緊急タスク完了後の表示テスト
// スタックには残るが表示からは除外されることを確認
#[test]
fn test_completed_urgent_task_is_hidden() {
    let mut tasks = TaskCollection::new();
    let mut completed = CompletedQueue::new();
    let mut urgent = UrgentStack::new();

    let x = tasks.add_task(create_test_task("X", (1, 2, 2025), true, Category::Work));
    assert!(urgent.push(&tasks, x));

    completed.enqueue(&mut tasks, x).unwrap();
    tasks.remove_task(x).unwrap();

    assert!(!urgent.is_empty());
    assert_eq!(urgent.displayed(&tasks).count(), 0);
    assert!(tasks.is_empty());
    assert!(tasks.task(x).unwrap().is_completed());
}

// 順序番号の安定性テスト
// 追加・削除がなければ同じ番号が同じタスクを指すことを確認
#[test]
fn test_ordinals_are_stable_between_calls() {
    let mut tasks = TaskCollection::new();
    for (i, name) in ["one", "two", "three"].iter().enumerate() {
        tasks.add_task(create_test_task(name, (i as u32 + 1, 1, 2025), false, Category::Study));
    }

    let first_pass: Vec<Option<TaskId>> =
        (1..=4).map(|n| tasks.active_task_by_ordinal(n)).collect();
    let second_pass: Vec<Option<TaskId>> =
        (1..=4).map(|n| tasks.active_task_by_ordinal(n)).collect();
    assert_eq!(first_pass, second_pass);
    assert!(first_pass[3].is_none());

    for id in first_pass.into_iter().flatten() {
        assert!(!tasks.task(id).unwrap().is_completed());
    }
}

// 同一内容のタスクの識別テスト
// フィールドが同じでも別レコードとして扱われることを確認
#[test]
fn test_identical_tasks_are_distinct_records() {
    let mut app = TrackerApp::default();
    app.handle_add(create_test_task("Same", (1, 1, 2025), false, Category::Work));
    app.handle_add(create_test_task("Same", (1, 1, 2025), false, Category::Work));

    app.handle_complete(2).unwrap();
    assert_eq!(active_names(&app), vec!["Same"]);
    assert_eq!(app.completed().len(), 1);

    let remaining = app.tasks().active_task_by_ordinal(1).unwrap();
    assert!(!app.tasks().task(remaining).unwrap().is_completed());
}

// カテゴリ別表示テスト
// 完了済みタスクがカテゴリ表示から除外されることを確認
#[test]
fn test_category_listing_excludes_completed() {
    let mut app = TrackerApp::default();
    app.handle_add(create_test_task("Essay", (2, 3, 2025), false, Category::Study));
    app.handle_add(create_test_task("Quiz", (1, 3, 2025), false, Category::Study));

    // Sorting puts Quiz first, so ordinal 1 completes it
    app.handle_pending_selection().unwrap();
    app.handle_complete(1).unwrap();

    let text = app.handle_list_by_category();
    assert!(text.contains("Task: Essay"));
    assert!(!text.contains("Task: Quiz"));
}

// 完了キュー表示テスト
// 完了した順に表示されることを確認
#[test]
fn test_completed_listing_in_completion_order() {
    let mut app = TrackerApp::default();
    app.handle_add(create_test_task("First", (1, 1, 2025), false, Category::Work));
    app.handle_add(create_test_task("Second", (2, 1, 2025), false, Category::Work));

    app.handle_complete(2).unwrap();
    app.handle_complete(1).unwrap();

    let text = app.handle_list_completed();
    let second = text.find("Task: Second").unwrap();
    let first = text.find("Task: First").unwrap();
    assert!(second < first);
    assert_eq!(
        app.handle_list_by_due_date(),
        "Available tasks sorted by due date:\nNo available tasks to display.\n"
    );
}

// 緊急タスク表示テスト
// すべて完了した場合は空のメッセージが表示されることを確認
#[test]
fn test_urgent_listing_when_all_completed() {
    let mut app = TrackerApp::default();
    app.handle_add(create_test_task("Hotfix", (1, 1, 2025), true, Category::Work));
    assert!(app.handle_list_urgent().contains("Task: Hotfix"));

    app.handle_complete(1).unwrap();
    assert_eq!(app.handle_list_urgent(), "Urgent tasks:\nNo urgent tasks.\n");
    assert_eq!(app.urgent().len(), 1);
}
