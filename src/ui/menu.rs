//! The numbered track menu.

use crate::library::Track;

/// Outcome of parsing one line of menu input.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    /// Leave the menu loop.
    Exit,
    /// Play the track at this catalog index.
    Play(usize),
}

/// Parse a menu selection against a catalog of `len` entries.
///
/// `-1` exits, an in-range index selects a track, and anything else becomes
/// an error message for the user to read before the next prompt.
pub fn parse_selection(line: &str, len: usize) -> Result<Selection, String> {
    let trimmed = line.trim();
    match trimmed.parse::<i64>() {
        Ok(-1) => Ok(Selection::Exit),
        Ok(n) if n >= 0 && (n as usize) < len => Ok(Selection::Play(n as usize)),
        Ok(n) => Err(format!("no track with index {n}")),
        Err(_) => Err(format!("not a track index: {trimmed:?}")),
    }
}

/// Print the catalog with the indices `parse_selection` accepts.
pub fn print_catalog(tracks: &[Track]) {
    if tracks.is_empty() {
        println!("(no playable tracks)");
        return;
    }
    for (i, track) in tracks.iter().enumerate() {
        println!("{i:3}  {}", track.display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_one_exits() {
        assert_eq!(parse_selection("-1", 3), Ok(Selection::Exit));
        assert_eq!(parse_selection(" -1 \n", 0), Ok(Selection::Exit));
    }

    #[test]
    fn in_range_indices_play() {
        assert_eq!(parse_selection("0", 3), Ok(Selection::Play(0)));
        assert_eq!(parse_selection("2\n", 3), Ok(Selection::Play(2)));
    }

    #[test]
    fn out_of_range_indices_are_errors() {
        assert!(parse_selection("3", 3).is_err());
        assert!(parse_selection("-2", 3).is_err());
        assert!(parse_selection("0", 0).is_err());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_selection("abc", 3).is_err());
        assert!(parse_selection("", 3).is_err());
        assert!(parse_selection("1.5", 3).is_err());
    }
}
