//! Printer behavior against in-memory streams.

use richprint::{Printer, Renderer, Substitution, visible_ansi};

fn run(debug: bool, lines: &[&str]) -> (String, String) {
    let mut printer = Printer::new(Vec::new(), Vec::new()).with_debug(debug);
    for line in lines {
        printer.print(line).unwrap();
    }
    let (out, diag) = printer.into_inner();
    (String::from_utf8(out).unwrap(), String::from_utf8(diag).unwrap())
}

#[test]
fn prints_each_line_rendered() {
    let (out, diag) = run(
        false,
        &["[red on blue bold]Hello[/] [green]World[/]", "plain"],
    );
    assert_eq!(
        out,
        "\x1b[31;44;1mHello\x1b[0m \x1b[32mWorld\x1b[0m\nplain\n"
    );
    assert_eq!(diag, "");
}

#[test]
fn debug_channel_snapshot() {
    let (_, diag) = run(true, &["[#ffffff on green] PASS [/]"]);
    insta::assert_snapshot!(diag.trim_end(), @r"
    Original text: [#ffffff on green] PASS [/]
    Final text with visible ANSI: \x1b[38;2;255;255;255;42m PASS \x1b[0m
    ");
}

#[test]
fn debug_output_matches_primary_output() {
    let (out, diag) = run(true, &["[yellow]warn[/]"]);
    let visible = diag
        .lines()
        .nth(1)
        .and_then(|line| line.strip_prefix("Final text with visible ANSI: "))
        .unwrap();
    assert_eq!(visible, visible_ansi(out.trim_end_matches('\n')));
}

#[test]
fn in_place_renderer() {
    let renderer = Renderer::new().with_substitution(Substitution::InPlace);
    let mut printer = Printer::new(Vec::new(), Vec::new()).with_renderer(renderer);
    printer.print("[red]a[/] x]y[/] [0m x]y[/]").unwrap();

    let (out, _) = printer.into_inner();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x1b[31ma\x1b[0m x]y[/] \x1b[37my\x1b[0m\n"
    );
}
