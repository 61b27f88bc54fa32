use ferrous_dig_domain::{DelegationHop, ResolutionResult};
use std::fmt;

/// dig-style text rendering of a finished query.
pub struct DigOutput<'a> {
    result: &'a ResolutionResult,
    with_trace: bool,
}

impl<'a> DigOutput<'a> {
    pub fn new(result: &'a ResolutionResult, with_trace: bool) -> Self {
        Self { result, with_trace }
    }

    fn write_hop(f: &mut fmt::Formatter<'_>, hop: &DelegationHop) -> fmt::Result {
        let offered: Vec<String> = hop.servers.iter().map(|s| s.to_string()).collect();
        writeln!(
            f,
            ";; Level {}: {} server(s) offered: {}",
            hop.level,
            offered.len(),
            offered.join(", ")
        )?;

        let reply = &hop.response;
        if reply.is_empty() {
            return writeln!(f, ";; no response\n");
        }

        writeln!(
            f,
            ";; {}, {} answer(s), {} authority, {} additional, {} bytes{}",
            reply.status(),
            reply.answers.len(),
            reply.authority.len(),
            reply.additional.len(),
            reply.wire_size,
            if reply.authoritative { ", authoritative" } else { "" }
        )?;
        for record in reply.answers.iter().chain(reply.authority.iter()) {
            writeln!(f, "{}", record)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DigOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        if self.with_trace {
            for hop in &result.trace {
                Self::write_hop(f, hop)?;
            }
        }

        writeln!(f, "QUESTION SECTION:")?;
        match result.question_section.first() {
            Some(question) => writeln!(f, "{}", question)?,
            None => writeln!(f, "{}", result.question)?,
        }

        writeln!(f, "\nANSWER SECTION:")?;
        for record in &result.answers {
            writeln!(f, "{}", record)?;
        }

        writeln!(f, "\nQuery time: {} msec", result.query_time_ms())?;
        writeln!(f, "WHEN: {}", result.completed_at.format("%a %b %d %H:%M:%S %Z %Y"))?;
        writeln!(f, "MSG SIZE recd: {}", result.message_size)
    }
}
