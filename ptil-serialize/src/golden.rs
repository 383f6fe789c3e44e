//! Frozen reference serialization of 10 sample CSCs (§9's open question:
//! the ultra-compact abbreviation table "must be frozen at implementation
//! time and covered by a golden-output test vector"). Changing `ultra`'s
//! output for any of these without updating the snapshots is a breaking
//! change to the wire format.

#[cfg(test)]
mod tests {
    use crate::format::Format;
    use crate::serializer::serialize;
    use ptil::{Csc, Entity, Meta, Operator, Role, Root};

    fn sample_cscs() -> Vec<Csc> {
        let mut samples = Vec::new();

        let mut c = Csc::new(Root::Motion);
        c.ops = vec![Operator::Future, Operator::Negation];
        c.roles.insert(Role::Agent, Entity::from_tokens(["boy"]));
        c.roles.insert(Role::Goal, Entity::from_tokens(["school"]));
        c.roles.insert(Role::Time, Entity::from_tokens(["tomorrow"]));
        c.meta = Some(Meta::Assertive);
        samples.push(c);

        let mut c = Csc::new(Root::Transfer);
        c.ops = vec![Operator::Past];
        c.roles.insert(Role::Agent, Entity::from_tokens(["she"]));
        c.roles.insert(Role::Goal, Entity::from_tokens(["him"]));
        c.roles.insert(Role::Theme, Entity::from_tokens(["book"]));
        c.meta = Some(Meta::Assertive);
        samples.push(c);

        let mut c = Csc::new(Root::Existence);
        c.ops = vec![Operator::Past];
        c.roles.insert(Role::Agent, Entity::from_tokens(["cat"]));
        c.meta = Some(Meta::Question);
        samples.push(c);

        let mut c = Csc::new(Root::Motion);
        c.ops = vec![Operator::Present];
        c.roles.insert(Role::Agent, Entity::from_tokens(["niño"]));
        c.meta = Some(Meta::Assertive);
        samples.push(c);

        let mut c = Csc::new(Root::Motion);
        c.ops = vec![Operator::Present];
        c.meta = Some(Meta::Command);
        samples.push(c);

        let c = Csc::new(Root::Existence);
        samples.push(c);

        let mut c = Csc::new(Root::Communication);
        c.ops = vec![Operator::Past];
        c.roles.insert(Role::Agent, Entity::from_tokens(["she"]));
        c.roles.insert(Role::Theme, Entity::from_tokens(["the", "news"]));
        c.meta = Some(Meta::Evidential);
        samples.push(c);

        let mut c = Csc::new(Root::Desire);
        c.ops = vec![Operator::Possible];
        c.roles.insert(Role::Agent, Entity::from_tokens(["he"]));
        c.roles.insert(Role::Theme, Entity::from_tokens(["coffee"]));
        c.meta = Some(Meta::Uncertain);
        samples.push(c);

        let mut c = Csc::new(Root::Destruction);
        c.ops = vec![Operator::Past, Operator::Completed];
        c.roles.insert(Role::Agent, Entity::from_tokens(["storm"]));
        c.roles.insert(Role::Patient, Entity::from_tokens(["bridge"]));
        c.meta = Some(Meta::Assertive);
        samples.push(c);

        let mut c = Csc::new(Root::Perception);
        c.ops = vec![Operator::Continuous];
        c.roles.insert(Role::Agent, Entity::from_tokens(["we"]));
        c.roles.insert(Role::Theme, Entity::from_tokens(["the", "parade"]));
        c.roles.insert(Role::Location, Entity::from_tokens(["downtown"]));
        c.meta = Some(Meta::Assertive);
        samples.push(c);

        samples
    }

    #[test]
    fn ultra_abbreviation_table_is_frozen() {
        let rendered: Vec<String> = sample_cscs()
            .iter()
            .map(|c| serialize(c, Format::Ultra))
            .collect();
        insta::assert_snapshot!(rendered.join("\n"), @r###"
        MOTION|FUTURE|NEGATION|ABOY|GSCHOOL|TTOMORROW|ASSERTIVE
        TRANSFER|PAST|ASHE|GHIM|EBOOK|ASSERTIVE
        EXISTENCE|PAST|ACAT|QUESTION
        MOTION|PRESENT|ANIÑO|ASSERTIVE
        MOTION|PRESENT|COMMAND
        EXISTENCE
        COMMUNICATION|PAST|ASHE|ETHE_NEWS|EVIDENTIAL
        DESIRE|POSSIBLE|AHE|ECOFFEE|UNCERTAIN
        DESTRUCTION|PAST|COMPLETED|ASTORM|PBRIDGE|ASSERTIVE
        PERCEPTION|CONTINUOUS|AWE|ETHE_PARADE|LDOWNTOWN|ASSERTIVE
        "###);
    }
}
