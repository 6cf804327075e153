//! End-to-end scenarios driven through the public `Session` API.

use termfolio_core::{
    ContentItem, Effect, FileItem, FixedClock, Key, KeyInput, NavigationMode, OutputLine,
    Repository, Section, Session, Style,
};

fn files() -> Vec<FileItem> {
    vec![
        FileItem::file("welcome.txt", Section::Welcome),
        FileItem::folder("projects", Section::Projects, false),
        FileItem::folder("connect", Section::Connect, false),
        FileItem::file("about.md", Section::About),
        FileItem::file("terminal.js", Section::Terminal),
    ]
}

fn session() -> Session {
    Session::new(files(), FixedClock::new(1_704_067_200_000.0, "Mon Jan 01 2024"))
        .unwrap()
        .with_seed(3)
}

fn repos(count: usize) -> Vec<Repository> {
    (0..count)
        .map(|i| Repository {
            name: format!("repo-{:02}", i),
            html_url: format!("https://github.com/0x5un5h1n3/repo-{:02}", i),
            stargazers_count: (100 - i) as u32,
            ..Default::default()
        })
        .collect()
}

fn page(key: Key) -> KeyInput {
    KeyInput::page(key)
}

fn lines_with_style(session: &Session, style: Style) -> Vec<String> {
    session
        .output()
        .lines()
        .filter(|l| l.style == style)
        .map(|l| l.text.clone())
        .collect()
}

#[test]
fn cat_about_activates_section() {
    let mut s = session();
    s.execute("cat about.md");
    assert_eq!(s.active_section(), Section::About);
    assert!(s.output().contains("Displaying: about.md", Style::Success));
}

#[test]
fn cd_to_unknown_directory_reports_once() {
    let mut s = session();
    s.execute("cd nowhere");
    assert_eq!(
        lines_with_style(&s, Style::Error),
        vec!["Directory not found: nowhere"]
    );
    assert_eq!(s.active_section(), Section::Welcome);
}

#[test]
fn find_matches_projects_only() {
    let mut s = session();
    s.execute("find project");
    assert_eq!(
        lines_with_style(&s, Style::Success),
        vec!["./portfolio/projects/"]
    );
}

#[test]
fn empty_content_list_is_inert() {
    let mut s = session();
    s.set_section_items(Section::Welcome, vec![]);
    s.handle_key(page(Key::Tab));
    assert_eq!(s.mode(), NavigationMode::Content);

    for key in [Key::Down, Key::Up, Key::Left, Key::Right, Key::Enter, Key::Space] {
        let outcome = s.handle_key(page(key));
        assert!(
            outcome
                .effects
                .iter()
                .all(|e| matches!(e, Effect::ScrollPage(_))),
            "{:?} produced {:?}",
            key,
            outcome.effects
        );
    }
    assert_eq!(s.content().selected(), None);
}

#[test]
fn load_more_keeps_selected_index() {
    let mut s = session();
    s.projects_loaded(repos(14));
    s.execute("cd projects");
    s.handle_key(page(Key::Tab));
    assert_eq!(s.content().len(), 7);

    // 0 -> 2 -> 4 in the two-column grid
    s.handle_key(page(Key::Down));
    s.handle_key(page(Key::Down));
    assert!(s.content_marked(4));

    let effects = s.load_more_projects();
    assert!(s.output().contains("Loaded more projects (12/14)", Style::Success));
    assert_eq!(s.projects().visible().len(), 12);
    assert_eq!(s.content().len(), 13);
    assert!(s.content_marked(4));
    assert_eq!(effects, vec![Effect::ScrollIntoView(4)]);
}

#[test]
fn load_more_via_keyboard_activation() {
    let mut s = session();
    s.projects_loaded(repos(8));
    s.execute("cat projects");
    s.handle_key(page(Key::Tab));

    // last card row, then the load-more control after it
    for _ in 0..4 {
        s.handle_key(page(Key::Down));
    }
    assert!(s.content_marked(6));
    s.handle_key(page(Key::Enter));
    assert!(s.output().contains("Loaded more projects (8/8)", Style::Success));
    assert_eq!(s.content().len(), 8);
    assert!(s.content_marked(6));
}

#[test]
fn card_activation_follows_repository() {
    let mut s = session();
    s.projects_loaded(repos(3));
    s.execute("cd projects");
    s.handle_key(page(Key::Tab));
    s.handle_key(page(Key::Right));
    let outcome = s.handle_key(page(Key::Enter));
    assert_eq!(
        outcome.effects,
        vec![Effect::FollowLink(
            "https://github.com/0x5un5h1n3/repo-01".into()
        )]
    );
}

#[test]
fn history_keeps_newest_hundred() {
    let mut s = session();
    for i in 0..150 {
        s.execute(&format!("echo {}", i));
    }
    let history: Vec<_> = s.history().iter().collect();
    assert_eq!(history.len(), 100);
    assert_eq!(history[0], "echo 149");
    assert_eq!(history[99], "echo 50");
}

#[test]
fn history_replay_round_trip() {
    let mut s = session();
    let lines = ["ls", "pwd", "whoami", "date"];
    for line in lines {
        s.execute(line);
    }
    for n in 1..=4 {
        s.set_input("draft");
        for _ in 0..n {
            s.handle_key(KeyInput::shell(Key::Up));
        }
        assert_eq!(s.input(), lines[4 - n], "after {} steps back", n);
        for _ in 0..n {
            s.handle_key(KeyInput::shell(Key::Down));
        }
        assert_eq!(s.input(), "", "round trip of {}", n);
    }
}

#[test]
fn autocomplete_round_trip() {
    let mut s = session();
    s.set_input("wh");
    s.handle_key(KeyInput::shell(Key::Tab));
    assert_eq!(s.input(), "whoami");

    s.set_input("qq");
    s.handle_key(KeyInput::shell(Key::Tab));
    assert_eq!(s.input(), "qq");
}

#[test]
fn modes_are_exclusive() {
    let mut s = session();
    s.set_section_items(
        Section::Welcome,
        vec![
            ContentItem::link("GitHub", "https://github.com/0x5un5h1n3"),
            ContentItem::button("Copy email", "copy-email"),
        ],
    );
    let keys = [
        Key::Tab,
        Key::Down,
        Key::Escape,
        Key::Down,
        Key::Right,
        Key::Left,
        Key::Escape,
        Key::Tab,
    ];
    for key in keys {
        s.handle_key(page(key));
        let files = (0..s.explorer().len()).filter(|&i| s.file_marked(i)).count();
        let content = (0..s.content().len())
            .filter(|&i| s.content_marked(i))
            .count();
        match s.mode() {
            NavigationMode::Files => assert_eq!((files, content), (1, 0)),
            NavigationMode::Content => {
                let expected = usize::from(!s.content().is_empty());
                assert_eq!((files, content), (0, expected));
            }
        }
    }
}

#[test]
fn section_change_in_content_mode_starts_at_top() {
    let links = |prefix: &str| -> Vec<ContentItem> {
        (0..4)
            .map(|i| {
                ContentItem::link(
                    format!("{}-{}", prefix, i),
                    format!("https://{}/{}", prefix, i),
                )
            })
            .collect()
    };
    let mut s = session();
    s.set_section_items(Section::Welcome, links("welcome"));
    s.set_section_items(Section::Connect, links("connect"));
    s.handle_key(page(Key::Tab));
    for _ in 0..3 {
        s.handle_key(page(Key::Down));
    }
    assert!(s.content_marked(3));

    let effects = s.execute("cd connect");
    assert_eq!(effects, vec![Effect::ScrollIntoView(0)]);
    assert_eq!(s.active_section(), Section::Connect);
    assert_eq!(s.mode(), NavigationMode::Content);
    let marked: Vec<_> = (0..s.content().len())
        .filter(|&i| s.content_marked(i))
        .collect();
    assert_eq!(marked, vec![0]);

    let outcome = s.handle_key(page(Key::Down));
    assert_eq!(outcome.effects[0], Effect::ScrollIntoView(1));
    assert!(s.content_marked(1));
}

#[test]
fn ping_lines_are_scheduled_in_order() {
    let mut s = session();
    let effects = s.execute("ping localhost");
    assert!(s.output().contains("PING localhost:", Style::Info));
    let delays: Vec<_> = effects
        .iter()
        .map(|e| match e {
            Effect::Schedule { delay_ms, .. } => *delay_ms,
            other => panic!("unexpected effect {:?}", other),
        })
        .collect();
    assert_eq!(delays, vec![500, 1000, 1500]);
}

#[test]
fn clear_does_not_touch_history() {
    let mut s = session();
    s.execute("whoami");
    s.execute("clear");
    assert!(s.output().is_empty());
    assert_eq!(s.history().len(), 2);
    s.print([OutputLine::comment("banner")]);
    assert_eq!(s.output().len(), 1);
}
