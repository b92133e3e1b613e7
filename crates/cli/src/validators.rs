use anyhow::Context;
use octopus_relay_sdk::{
    state::{Reader, ValidatorSetCursor},
    types,
};

pub(crate) async fn render(
    reader: &Reader,
    id: types::AppchainId,
    seq_num: Option<types::SeqNum>,
    json: bool,
) -> anyhow::Result<()> {
    let latest = reader
        .client()
        .curr_validator_set_index(id)
        .await
        .with_context(|| format!("fetching validator set index of appchain #{id}"))?;

    let mut cursor = ValidatorSetCursor::new(latest);
    if let Some(seq_num) = seq_num {
        if seq_num > latest {
            tracing::warn!(seq_num, latest, "validator set not formed yet, showing latest");
        }
        cursor.seek(seq_num);
    }

    let set = reader
        .validator_set(id, cursor.current())
        .await
        .with_context(|| format!("fetching validator set #{} of appchain #{}", cursor.current(), id))?;

    if json {
        return crate::print_json(&set);
    }
    print!("{}", set);

    let mut prev = cursor;
    let mut next = cursor;
    let hints: Vec<String> = [
        prev.back().then(|| format!("previous: --seq-num {}", prev.current())),
        next.forward().then(|| format!("next: --seq-num {}", next.current())),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !hints.is_empty() {
        println!("\n{} of {} ({})", cursor.current(), cursor.latest(), hints.join(", "));
    }
    Ok(())
}
