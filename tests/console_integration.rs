use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

fn run_console(script: &[u8]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(script).unwrap();
    drop(stdin);

    let stdout = child.stdout.take().unwrap();
    let lines = BufReader::new(stdout)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .expect("read failed");
    let status = child.wait().expect("console did not exit");
    assert!(status.success());
    lines
}

#[test]
fn console_plays_and_undoes() {
    let lines = run_console(b"e2e4\nfen\nundo\nfen\nquit\n");
    let fens: Vec<&String> = lines.iter().filter(|l| l.contains(" - ")).collect();
    assert_eq!(
        fens,
        [
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - e3 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        ]
    );
}

#[test]
fn console_reports_checkmate() {
    let lines = run_console(b"f2f3\ne7e5\ng2g4\nd8h4\nmoves\nquit\n");
    assert!(lines.iter().any(|l| l == "checkmate, Black wins"));
    assert_eq!(lines.last().map(String::as_str), Some(""));
}

#[test]
fn console_rejects_bad_input() {
    let lines = run_console(b"e2e5\nhello\n");
    assert!(lines.iter().any(|l| l.starts_with("error:")));
    assert!(lines.iter().any(|l| l == "unknown command: hello"));
}

#[test]
fn console_stops_at_end_of_input() {
    let lines = run_console(b"perft 1\n");
    assert_eq!(lines.last().map(String::as_str), Some("perft 1: 20"));
}
