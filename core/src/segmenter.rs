/// Strip idle padding around the marks of a character.
/// Returns an empty slice when the history holds no active tick.
pub fn trim_silence(bits: &[bool]) -> &[bool] {
    match (
        bits.iter().position(|&bit| bit),
        bits.iter().rposition(|&bit| bit),
    ) {
        (Some(first), Some(last)) => &bits[first..=last],
        _ => &[],
    }
}
