//! Behavioral tests of the shell, typewriter and revealer through the public API.

use std::time::{Duration, Instant};

use folio::page::Page;
use folio::reveal::Revealer;
use folio::schedule::ScheduledTask;
use folio::shell::{CommandTable, LogLine, Response, Shell};
use folio::typewriter::{Timing, Typewriter};

fn last_response(shell: &Shell) -> String {
    match shell.log().lines().last() {
        Some(LogLine::Response { content }) => content.to_plain(),
        other => panic!("expected response, got {:?}", other),
    }
}

#[test]
fn every_known_command_answers_regardless_of_case_and_spacing() {
    let table = CommandTable::builtin();
    for name in table.all_names() {
        let Some(Response::Print { content }) = table.resolve(name) else {
            continue;
        };
        let mut shell = Shell::new();
        shell.submit(&format!("  {}  ", name.to_uppercase()));
        assert_eq!(shell.log().len(), 2, "{}", name);
        assert_eq!(last_response(&shell), content.to_plain(), "{}", name);
    }
}

#[test]
fn alias_and_name_produce_identical_content() {
    let mut a = Shell::new();
    let mut b = Shell::new();
    a.submit("CERTS");
    b.submit("certifications");
    assert_eq!(last_response(&a), last_response(&b));
}

#[test]
fn blank_submission_echoes_without_history() {
    let mut shell = Shell::new();
    shell.submit("   ");
    assert_eq!(
        shell.log().lines(),
        [LogLine::Prompt {
            input: "   ".into()
        }]
    );
    assert!(shell.history().is_empty());
}

#[test]
fn history_walks_back_and_resets_to_draft() {
    let mut shell = Shell::new();
    shell.submit("about");
    shell.submit("skills");

    shell.recall_previous();
    assert_eq!(shell.input(), "skills");
    shell.recall_previous();
    assert_eq!(shell.input(), "about");
    shell.recall_previous();
    assert_eq!(shell.input(), "about");

    shell.recall_next();
    assert_eq!(shell.input(), "skills");
    shell.recall_next();
    assert_eq!(shell.input(), "");
    assert_eq!(shell.history().cursor(), shell.history().len());
}

#[test]
fn autocomplete_single_and_multiple() {
    let mut shell = Shell::new();
    shell.auto_complete("pro");
    assert_eq!(shell.input(), "projects");
    assert!(shell.log().is_empty());

    shell.set_input("a");
    shell.auto_complete("a");
    assert_eq!(shell.input(), "a");
    assert_eq!(shell.log().len(), 2);
    assert_eq!(last_response(&shell), "about  awards");
}

#[test]
fn clear_empties_log() {
    let mut shell = Shell::new();
    shell.submit("about");
    shell.submit("clear");
    assert!(shell.log().is_empty());
}

#[test]
fn typewriter_cycles_through_every_role_and_wraps() {
    let timing = Timing {
        type_delay: Duration::from_millis(1),
        delete_delay: Duration::from_millis(1),
        pause_full: Duration::from_millis(5),
        pause_empty: Duration::from_millis(2),
    };
    let roles = ["ab", "c"];
    let start = Instant::now();
    let mut task = ScheduledTask::start(Typewriter::new(roles, timing), start);

    let mut now = start;
    let mut seen_full = Vec::new();
    for _ in 0..40 {
        if task.poll(now) {
            let text = task.task().text().to_string();
            if roles.contains(&text.as_str()) && seen_full.last() != Some(&text) {
                seen_full.push(text);
            }
        }
        now = task.next_due().expect("animation keeps running");
    }
    assert_eq!(&seen_full[..3], ["ab", "c", "ab"]);
}

#[test]
fn cancelled_animation_does_not_advance() {
    let start = Instant::now();
    let mut task = ScheduledTask::start(Typewriter::new(["abc"], Timing::default()), start);
    task.poll(start);
    task.cancel();
    assert!(!task.poll(start + Duration::from_secs(10)));
    assert_eq!(task.task().text(), "a");

    task.resume(start + Duration::from_secs(10));
    assert!(task.poll(start + Duration::from_secs(10)));
    assert_eq!(task.task().text(), "ab");
}

#[test]
fn scrolling_through_page_reveals_every_section_once() {
    let mut page = Page::portfolio(&CommandTable::builtin());
    page.set_viewport_rows(10);
    let mut revealer = Revealer::default();
    for idx in 0..page.sections().len() {
        revealer.observe(idx);
    }

    let mut revealed = Vec::new();
    loop {
        revealed.extend(revealer.process(page.intersections()));
        if page.offset() + page.viewport_rows() >= page.total_rows() {
            break;
        }
        page.scroll_by(1);
    }
    revealed.extend(revealer.process(page.intersections()));

    revealed.sort_unstable();
    assert_eq!(revealed, (0..page.sections().len()).collect::<Vec<_>>());
    assert!(revealer.is_done());
}
