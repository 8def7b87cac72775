use crate::model::ad_record::AdRecord;

/// Result of parsing one raw model reply. `skipped` counts the blocks
/// that did not match the expected shape and were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBatch {
    pub records: Vec<AdRecord>,
    pub skipped: usize,
}

/// Splits a raw model reply into ad records, best effort.
///
/// A malformed block is dropped and counted, never turned into a
/// placeholder, so the output can be shorter than the count the prompt
/// asked for. Never fails: garbage in, empty batch out.
pub fn parse_ads(raw: &str) -> ParsedBatch {
    let mut records = Vec::new();
    let mut skipped = 0;

    let mut blocks = raw.split("Ad ");
    // Everything before the first "Ad " is model preamble.
    blocks.next();

    for block in blocks {
        match parse_block(block) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    ParsedBatch { records, skipped }
}

fn parse_block(block: &str) -> Option<AdRecord> {
    let (number, body) = block.split_once(':')?;

    let mut lines = body.trim().lines();

    // First line carries the headline, next non-empty line the
    // description. Both use a "Label: text" shape.
    let headline = lines.next()?.split_once(": ")?.1;
    let description = lines
        .find(|line| !line.trim().is_empty())?
        .split_once(": ")?
        .1;

    Some(AdRecord {
        number: number.trim().to_string(),
        headline: headline.trim().to_string(),
        description: description.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: &str, headline: &str, description: &str) -> AdRecord {
        AdRecord {
            number: number.into(),
            headline: headline.into(),
            description: description.into(),
        }
    }

    #[test]
    fn empty_input_yields_empty_batch() {
        let batch = parse_ads("");
        assert!(batch.records.is_empty());
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn well_formed_blocks_parse_in_order() {
        let raw = "Ad 1:\nHeadline: Save Big\nDescription: Great deals today.\n\
                   Ad 2:\nHeadline: Act Fast\nDescription: Limited time offer.";

        let batch = parse_ads(raw);
        assert_eq!(
            batch.records,
            vec![
                record("1", "Save Big", "Great deals today."),
                record("2", "Act Fast", "Limited time offer."),
            ]
        );
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn preamble_before_first_block_is_ignored() {
        let raw = "Sure! Here are your advertisements:\n\n\
                   Ad 1:\nHeadline: Go Green\nDescription: Kind to the planet.";

        let batch = parse_ads(raw);
        assert_eq!(batch.records, vec![record("1", "Go Green", "Kind to the planet.")]);
    }

    #[test]
    fn block_missing_description_is_skipped() {
        let raw = "Ad 1:\nHeadline: Save Big\nDescription: Great deals today.\n\
                   Ad 2:\nHeadline: Orphaned headline\n\
                   Ad 3:\nHeadline: Act Fast\nDescription: Limited time offer.";

        let batch = parse_ads(raw);
        assert_eq!(
            batch.records,
            vec![
                record("1", "Save Big", "Great deals today."),
                record("3", "Act Fast", "Limited time offer."),
            ]
        );
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn block_without_colon_is_skipped() {
        let raw = "Ad one has no colon at all\n\
                   Ad 2:\nHeadline: Still Here\nDescription: The rest survives.";

        let batch = parse_ads(raw);
        assert_eq!(batch.records, vec![record("2", "Still Here", "The rest survives.")]);
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn blank_line_between_headline_and_description_is_tolerated() {
        let raw = "Ad 1:\nHeadline: Save Big\n\nDescription: Great deals today.";

        let batch = parse_ads(raw);
        assert_eq!(batch.records, vec![record("1", "Save Big", "Great deals today.")]);
    }

    #[test]
    fn fields_are_trimmed() {
        let raw = "Ad 1 :\nHeadline:  Save Big  \nDescription:  Great deals today.  ";

        let batch = parse_ads(raw);
        assert_eq!(batch.records, vec![record("1", "Save Big", "Great deals today.")]);
    }

    #[test]
    fn garbage_yields_empty_batch_without_panicking() {
        let batch = parse_ads("Ad Ad Ad ::::\nno structure here");
        assert!(batch.records.is_empty());
        assert!(batch.skipped > 0);
    }
}
