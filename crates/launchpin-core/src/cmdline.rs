//! Windows command-line quoting.
//!
//! Re-assembles an argument vector into the single string form that the
//! Microsoft C runtime parses back into `argv`, following the same rules
//! as `CommandLineToArgvW`. Backslashes are ordinary characters unless
//! they sit directly in front of a double quote, which is what makes the
//! escaping rules below asymmetric.

/// True if `arg` cannot be passed through verbatim.
///
/// Whitespace would split the argument and a bare quote would confuse the
/// receiving parser, so both force the quoted form. Empty arguments have
/// no verbatim form at all.
fn needs_quoting(arg: &str) -> bool {
    arg.is_empty() || arg.contains([' ', '\t', '"'])
}

fn append_quoted(out: &mut String, arg: &str) {
    if !needs_quoting(arg) {
        out.push_str(arg);
        return;
    }

    out.push('"');
    let mut backslashes = 0;
    for ch in arg.chars() {
        match ch {
            '\\' => backslashes += 1,
            '"' => {
                // Runs of backslashes before a quote are doubled, then the
                // quote itself is escaped.
                out.push_str(&"\\".repeat(backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.push_str(&"\\".repeat(backslashes));
                out.push(ch);
                backslashes = 0;
            }
        }
    }
    // A trailing run would otherwise escape the closing quote.
    out.push_str(&"\\".repeat(backslashes * 2));
    out.push('"');
}

/// Join an argument vector into one command-line string.
///
/// Each argument is quoted only when it has to be, so typical flag/value
/// pairs come out byte-identical to how they were typed. The result
/// parses back into the original vector with [`split`].
pub fn join<S: AsRef<str>>(args: &[S]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        append_quoted(&mut out, arg.as_ref());
    }
    out
}

/// Split a command-line string back into its argument vector.
///
/// Inverse of [`join`] under the same runtime rules: an even run of
/// backslashes before a quote yields half as many literal backslashes and
/// toggles quoted mode, an odd run yields the same plus a literal quote.
/// Runs of unquoted whitespace separate arguments without producing
/// empty ones; an explicit `""` does produce an empty argument.
pub fn split(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    // Distinguishes "no argument in progress" from "empty argument in
    // progress" so that `""` survives the trip.
    let mut in_arg = false;
    let mut in_quotes = false;
    let mut backslashes = 0;

    for ch in line.chars() {
        match ch {
            '\\' => {
                backslashes += 1;
                in_arg = true;
            }
            '"' => {
                in_arg = true;
                current.push_str(&"\\".repeat(backslashes / 2));
                if backslashes % 2 == 0 {
                    in_quotes = !in_quotes;
                } else {
                    current.push('"');
                }
                backslashes = 0;
            }
            ' ' | '\t' if !in_quotes => {
                current.push_str(&"\\".repeat(backslashes));
                backslashes = 0;
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            _ => {
                current.push_str(&"\\".repeat(backslashes));
                backslashes = 0;
                current.push(ch);
                in_arg = true;
            }
        }
    }

    current.push_str(&"\\".repeat(backslashes));
    if in_arg {
        args.push(current);
    }
    args
}
