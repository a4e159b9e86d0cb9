use super::*;

fn render(open: bool) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(ToastState::default()));
        let dialog = RwSignal::new(NoticeDialog::default());
        if open {
            dialog.update(NoticeDialog::open);
        }
        view! { <NoticeDialogModal dialog=dialog/> }.to_html()
    })
}

fn title_input(html: &str) -> &str {
    let start = html.find("<input").expect("title input rendered");
    let len = html[start..].find('>').expect("input tag closed");
    &html[start..=start + len]
}

#[test]
fn closed_dialog_renders_no_modal() {
    let html = render(false);
    assert!(!html.contains("Post New Notice"));
    assert!(!html.contains("notice-title"));
}

#[test]
fn open_dialog_focuses_title_input() {
    let html = render(true);
    assert!(html.contains("Post New Notice"));
    let input = title_input(&html);
    assert!(input.contains("id=\"notice-title\""), "{input}");
    assert!(input.contains("autofocus"), "{input}");
}
