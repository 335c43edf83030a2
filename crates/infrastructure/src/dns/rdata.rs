use hickory_resolver::proto::rr::RData;

/// Renders one answer record's data the way the table shows it:
/// A/AAAA as the address, CNAME/NS as the target name, MX as
/// "preference exchange", SOA as the full tuple, TXT as the joined strings.
pub fn render(rdata: &RData) -> String {
    match rdata {
        RData::A(a) => a.0.to_string(),
        RData::AAAA(aaaa) => aaaa.0.to_string(),
        RData::CNAME(cname) => cname.0.to_utf8(),
        RData::NS(ns) => ns.0.to_utf8(),
        RData::MX(mx) => format!("{} {}", mx.preference(), mx.exchange().to_utf8()),
        RData::SOA(soa) => format!(
            "{} {} {} {} {} {} {}",
            soa.mname().to_utf8(),
            soa.rname().to_utf8(),
            soa.serial(),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum(),
        ),
        RData::TXT(txt) => txt
            .iter()
            .map(|data| String::from_utf8_lossy(data).into_owned())
            .collect::<Vec<_>>()
            .join(""),
        // unreachable through the CLI, which only issues the seven
        // supported types; fall back to the library's display form
        other => other.to_string(),
    }
}
