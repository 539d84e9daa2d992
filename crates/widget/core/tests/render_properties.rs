use serde_json::json;
use widget_core::{
    LocaleTable, SnapshotEntries, TapTarget, TextField, TextKey, Visibility, WidgetInstanceId,
    WidgetRenderer, WidgetSnapshot, render,
};

fn snapshot_from(value: serde_json::Value) -> WidgetSnapshot {
    let entries: SnapshotEntries = serde_json::from_value(value).unwrap();
    WidgetSnapshot::from_entries(&entries)
}

#[test]
fn english_snapshot_with_primary_todo() {
    let snapshot = WidgetSnapshot {
        locale_code: Some("en".into()),
        todo_count: Some(3),
        todo_primary_id: Some("t1".into()),
        todo_primary_title: Some("Finish essay on colonial history".into()),
        ..WidgetSnapshot::default()
    };

    let rendered = render(&snapshot, &[WidgetInstanceId(11)]);
    assert_eq!(rendered.len(), 1);
    let content = &rendered[0].content;

    assert_eq!(rendered[0].instance_id, WidgetInstanceId(11));
    assert_eq!(content.complete_action, Visibility::Visible);
    assert_eq!(
        content.text(TextField::CompleteAction),
        Some("Complete: Finish essay on co...")
    );
    assert_eq!(content.text(TextField::TodoCount), Some("TODO 3"));
    assert_eq!(content.text(TextField::TimetableCount), Some("TIMETABLE 0"));
    assert_eq!(content.text(TextField::IcsCount), Some("School events 0"));
    assert_eq!(content.text(TextField::Date), Some("Today"));
    assert_eq!(
        content.binding(TapTarget::CompleteAction),
        Some("campusmate://todo/complete?id=t1")
    );
}

#[test]
fn korean_snapshot_without_primary_todo() {
    let snapshot = WidgetSnapshot {
        locale_code: Some("ko".into()),
        todo_primary_id: Some(String::new()),
        todo_primary_title: Some("보고서".into()),
        ..WidgetSnapshot::default()
    };

    let content = WidgetRenderer::default().render_content(&snapshot);

    assert_eq!(content.complete_action, Visibility::Gone);
    assert_eq!(content.text(TextField::CompleteAction), None);
    assert_eq!(content.binding(TapTarget::CompleteAction), None);
    assert_eq!(content.text(TextField::TodoCount), Some("할 일 0"));
}

#[test]
fn empty_snapshot_renders_korean_empty_state() {
    let content = WidgetRenderer::default().render_content(&WidgetSnapshot::default());

    assert_eq!(content.text(TextField::Date), Some("오늘"));
    assert_eq!(content.text(TextField::TodoLines), Some("- 급한 할 일이 없어요"));
    assert_eq!(
        content.text(TextField::TimetableLines),
        Some("- 등록된 수업이 없어요")
    );
    assert_eq!(content.text(TextField::TodoCount), Some("할 일 0"));
    assert_eq!(content.text(TextField::TimetableCount), Some("시간표 0"));
    assert_eq!(content.text(TextField::IcsCount), Some("학교 일정 0"));
    assert_eq!(content.complete_action, Visibility::Gone);
    assert_eq!(content.texts.len(), 6);
}

#[test]
fn navigation_bindings_are_always_present() {
    let content = WidgetRenderer::default().render_content(&WidgetSnapshot::default());

    assert_eq!(
        content.binding(TapTarget::Root),
        Some("campusmate://nav/tab?target=home")
    );
    assert_eq!(
        content.binding(TapTarget::TodoSection),
        Some("campusmate://nav/tab?target=todo")
    );
    assert_eq!(
        content.binding(TapTarget::TimetableSection),
        Some("campusmate://nav/tab?target=timetable")
    );
    assert_eq!(
        content.binding(TapTarget::CalendarSection),
        Some("campusmate://nav/tab?target=calendar")
    );
    assert_eq!(content.bindings.len(), 4);
}

#[test]
fn english_prefix_selects_english_in_any_case() {
    let renderer = WidgetRenderer::default();
    for code in ["en", "EN", "en-US", "eN_au"] {
        let snapshot = WidgetSnapshot {
            locale_code: Some(code.into()),
            ..WidgetSnapshot::default()
        };
        let content = renderer.render_content(&snapshot);
        assert_eq!(content.text(TextField::TodoCount), Some("TODO 0"), "{code}");
        assert_eq!(content.text(TextField::Date), Some("Today"), "{code}");
    }

    for code in ["ko", "ko-KR", "ja", "de", " "] {
        let snapshot = WidgetSnapshot {
            locale_code: Some(code.into()),
            ..WidgetSnapshot::default()
        };
        let content = renderer.render_content(&snapshot);
        assert_eq!(content.text(TextField::TodoCount), Some("할 일 0"), "{code}");
    }
}

#[test]
fn blank_fields_render_like_their_fallbacks() {
    let renderer = WidgetRenderer::default();
    let table = LocaleTable::builtin();

    for code in ["en", "ko"] {
        let locale = table.resolve(Some(code));
        let blank = WidgetSnapshot {
            locale_code: Some(code.into()),
            date: Some("  ".into()),
            todo_lines: Some(String::new()),
            timetable_lines: Some("\n\t".into()),
            todo_primary_id: Some("t1".into()),
            todo_primary_title: Some(" ".into()),
            ..WidgetSnapshot::default()
        };
        let explicit = WidgetSnapshot {
            locale_code: Some(code.into()),
            date: Some(locale.text(TextKey::DateFallback).into()),
            todo_lines: Some(locale.text(TextKey::TodoLinesFallback).into()),
            timetable_lines: Some(locale.text(TextKey::TimetableLinesFallback).into()),
            todo_primary_id: Some("t1".into()),
            todo_primary_title: Some(locale.text(TextKey::PrimaryTodoFallback).into()),
            todo_count: Some(0),
            ics_count: Some(0),
            timetable_count: Some(0),
        };

        assert_eq!(
            renderer.render_content(&blank),
            renderer.render_content(&explicit),
            "{code}"
        );
    }
}

#[test]
fn fallback_title_is_localized() {
    let renderer = WidgetRenderer::default();
    let korean = WidgetSnapshot {
        todo_primary_id: Some("t2".into()),
        ..WidgetSnapshot::default()
    };
    assert_eq!(
        renderer
            .render_content(&korean)
            .text(TextField::CompleteAction),
        Some("완료: 가장 급한 할 일")
    );

    let english = WidgetSnapshot {
        locale_code: Some("en".into()),
        ..korean
    };
    assert_eq!(
        renderer
            .render_content(&english)
            .text(TextField::CompleteAction),
        Some("Complete: Top task")
    );
}

#[test]
fn visibility_follows_the_id_not_the_title() {
    let renderer = WidgetRenderer::default();
    let cases = [
        (None, Some("Essay"), false),
        (Some(""), Some("Essay"), false),
        (Some("   "), None, false),
        (Some("t1"), None, true),
        (Some("t1"), Some(""), true),
        (Some("t1"), Some("Essay"), true),
    ];

    for (id, title, visible) in cases {
        let snapshot = WidgetSnapshot {
            todo_primary_id: id.map(String::from),
            todo_primary_title: title.map(String::from),
            ..WidgetSnapshot::default()
        };
        let content = renderer.render_content(&snapshot);
        assert_eq!(
            content.complete_action.is_visible(),
            visible,
            "id={id:?} title={title:?}"
        );
        assert_eq!(
            content.text(TextField::CompleteAction).is_some(),
            visible,
            "id={id:?} title={title:?}"
        );
    }
}

#[test]
fn rendering_is_idempotent_and_identical_across_instances() {
    let snapshot = snapshot_from(json!({
        "widget_locale_code": "en",
        "widget_date": "Tue, Mar 5",
        "widget_todo_count": 2,
        "widget_todo_lines": "- Lab report\n- Essay draft",
        "widget_todo_primary_id": "todo/42 a",
        "widget_todo_primary_title": "Lab report",
        "widget_ics_count": 1,
        "widget_timetable_count": 3,
        "widget_timetable_lines": "- 09:00 Physics\n- 13:00 History",
    }));

    let ids = [WidgetInstanceId(3), WidgetInstanceId(1), WidgetInstanceId(2)];
    let first = render(&snapshot, &ids);
    let second = render(&snapshot, &ids);

    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|w| w.instance_id).collect::<Vec<_>>(),
        ids.to_vec()
    );
    assert!(first.iter().all(|w| w.content == first[0].content));

    let content = &first[0].content;
    assert_eq!(content.text(TextField::Date), Some("Tue, Mar 5"));
    assert_eq!(
        content.text(TextField::TodoLines),
        Some("- Lab report\n- Essay draft")
    );
    assert_eq!(content.text(TextField::TimetableCount), Some("TIMETABLE 3"));
    assert_eq!(content.text(TextField::IcsCount), Some("School events 1"));
    assert_eq!(
        content.text(TextField::CompleteAction),
        Some("Complete: Lab report")
    );
    assert_eq!(
        content.binding(TapTarget::CompleteAction),
        Some("campusmate://todo/complete?id=todo%2F42%20a")
    );
}

#[test]
fn external_locale_renders_without_code_changes() {
    let mut table = LocaleTable::builtin();
    table
        .merge_json(
            r#"{"ja": {"todo_label": "タスク", "complete_verb": "完了: ", "date_fallback": "今日"}}"#,
        )
        .unwrap();
    let renderer = WidgetRenderer::new(table, "campusmate");

    let snapshot = WidgetSnapshot {
        locale_code: Some("ja-JP".into()),
        todo_count: Some(5),
        todo_primary_id: Some("t1".into()),
        todo_primary_title: Some("レポート".into()),
        ..WidgetSnapshot::default()
    };
    let content = renderer.render_content(&snapshot);

    assert_eq!(content.text(TextField::TodoCount), Some("タスク 5"));
    assert_eq!(content.text(TextField::Date), Some("今日"));
    assert_eq!(
        content.text(TextField::CompleteAction),
        Some("完了: レポート")
    );
    // Keys the file left out come from the default locale.
    assert_eq!(content.text(TextField::TimetableCount), Some("시간표 0"));
}
