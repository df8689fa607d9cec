//! # Price/Deadline Response
//!
//! Reads the carrier's XML reply into per-service entries.
//!
//! The document has one root element whose `cServico` children each
//! describe a requested service:
//!
//! ```text
//! <Servicos>
//!   <cServico>
//!     <Codigo>40010</Codigo>
//!     <Valor>25,10</Valor>
//!     <PrazoEntrega>3</PrazoEntrega>
//!     <Erro>0</Erro>
//!     <MsgErro></MsgErro>
//!   </cServico>
//! </Servicos>
//! ```
//!
//! Every child field is kept verbatim in a [`ServiceEntry`]; typed accessors
//! interpret the ones the quote needs.
//!
//! The body is read as bytes. Text is decoded with the encoding named in the
//! XML declaration (the calculator declares `ISO-8859-1`), or UTF-8 if none.

use crate::domain::value_objects::enums::ServiceCode;
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::events::Event;
use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Element name of a per-service entry.
const SERVICE_ELEMENT: &str = "cServico";

/// One `cServico` element, as field name to trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ServiceEntry {
    fields: BTreeMap<String, String>,
}

impl ServiceEntry {
    /// Creates an entry from field pairs.
    #[must_use]
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns a raw field value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the carrier error code. Missing or non-numeric reads as 0.
    #[must_use]
    pub fn error_code(&self) -> i64 {
        self.get("Erro")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Returns true if the carrier flagged this entry as erroneous.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_code() != 0
    }

    /// Returns the carrier's error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.get("MsgErro").filter(|m| !m.is_empty())
    }

    /// Returns the service code, if present and valid.
    #[must_use]
    pub fn service_code(&self) -> Option<ServiceCode> {
        self.get("Codigo").and_then(|v| ServiceCode::from_str(v).ok())
    }

    /// Returns the delivery time in days, if present.
    ///
    /// A present field that is empty or not a day count reads as 0.
    #[must_use]
    pub fn delivery_days(&self) -> Option<u32> {
        self.get("PrazoEntrega").map(|v| v.trim().parse().unwrap_or(0))
    }

    /// Returns the price, if present.
    ///
    /// A present field that is empty or not an amount reads as zero.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        self.get("Valor").map(|v| parse_amount(v).unwrap_or(Decimal::ZERO))
    }
}

/// Parses an amount written with a comma decimal separator.
///
/// Dots are thousands separators when a comma is present, e.g. `"1.234,56"`.
/// Plain `"12.34"` is accepted as well.
///
/// # Examples
///
/// ```
/// use frete::infrastructure::carriers::response::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("12,34"), Some(Decimal::new(1234, 2)));
/// assert_eq!(parse_amount("1.234,56"), Some(Decimal::new(123456, 2)));
/// assert_eq!(parse_amount(""), None);
/// ```
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.to_owned()
    };
    Decimal::from_str(&normalized).ok()
}

/// Reads every `cServico` child of the document root.
///
/// # Errors
///
/// Returns `CarrierError::Parse` if the body is not well-formed XML, cannot
/// be decoded, has no root element, or the root has no `cServico` child.
pub fn parse_response(body: &[u8]) -> CarrierResult<Vec<ServiceEntry>> {
    let mut reader = Reader::from_reader(body);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut saw_root = false;
    let mut entries = Vec::new();
    let mut current: Option<ServiceEntry> = None;
    let mut field: Option<String> = None;
    let mut text = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| CarrierError::parse(format!("Malformed XML: {}", e)))?;
        let decoder = reader.decoder();

        match event {
            Event::Start(e) => {
                let name = decode(decoder, e.name().as_ref())?;
                match depth {
                    0 => saw_root = true,
                    1 if name == SERVICE_ELEMENT => current = Some(ServiceEntry::default()),
                    2 if current.is_some() => {
                        field = Some(name);
                        text.clear();
                    }
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(e) => {
                let name = decode(decoder, e.name().as_ref())?;
                match depth {
                    0 => saw_root = true,
                    1 if name == SERVICE_ELEMENT => entries.push(ServiceEntry::default()),
                    2 => {
                        if let Some(entry) = current.as_mut() {
                            entry.fields.insert(name, String::new());
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(t) if depth == 3 && field.is_some() => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| CarrierError::parse(format!("Malformed text: {}", e)))?;
                text.push_str(&unescaped);
            }
            Event::CData(c) if depth == 3 && field.is_some() => {
                text.push_str(&decode(decoder, &c)?);
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                match depth {
                    2 => {
                        if let (Some(entry), Some(name)) = (current.as_mut(), field.take()) {
                            entry.fields.insert(name, text.trim().to_owned());
                        }
                    }
                    1 => {
                        if let Some(entry) = current.take() {
                            entries.push(entry);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(CarrierError::parse("Unexpected end of document"));
    }
    if !saw_root {
        return Err(CarrierError::parse("Response has no root element"));
    }
    if entries.is_empty() {
        return Err(CarrierError::parse(format!(
            "Response has no {} element",
            SERVICE_ELEMENT
        )));
    }

    Ok(entries)
}

fn decode(decoder: Decoder, bytes: &[u8]) -> CarrierResult<String> {
    decoder
        .decode(bytes)
        .map(Cow::into_owned)
        .map_err(|e| CarrierError::parse(format!("Undecodable text: {}", e)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const TWO_SERVICES: &str = r#"<?xml version="1.0" encoding="ISO-8859-1" ?>
<Servicos>
  <cServico>
    <Codigo>40010</Codigo>
    <Valor>25,10</Valor>
    <PrazoEntrega>3</PrazoEntrega>
    <ValorSemAdicionais>25,10</ValorSemAdicionais>
    <EntregaDomiciliar>S</EntregaDomiciliar>
    <Erro>0</Erro>
    <MsgErro></MsgErro>
  </cServico>
  <cServico>
    <Codigo>40215</Codigo>
    <Valor>0,00</Valor>
    <PrazoEntrega>0</PrazoEntrega>
    <Erro>-888</Erro>
    <MsgErro><![CDATA[Servico indisponivel para o trecho informado]]></MsgErro>
  </cServico>
</Servicos>"#;

    mod document {
        use super::*;

        #[test]
        fn reads_every_entry() {
            let entries = parse_response(TWO_SERVICES.as_bytes()).unwrap();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].get("Codigo"), Some("40010"));
            assert_eq!(entries[0].get("EntregaDomiciliar"), Some("S"));
            assert_eq!(entries[0].get("MsgErro"), Some(""));
        }

        #[test]
        fn reads_cdata() {
            let entries = parse_response(TWO_SERVICES.as_bytes()).unwrap();
            assert_eq!(
                entries[1].error_message(),
                Some("Servico indisponivel para o trecho informado")
            );
        }

        #[test]
        fn unescapes_entities() {
            let body = "<Servicos><cServico><MsgErro>a &amp; b</MsgErro></cServico></Servicos>";
            let entries = parse_response(body.as_bytes()).unwrap();
            assert_eq!(entries[0].get("MsgErro"), Some("a & b"));
        }

        #[test]
        fn ignores_nested_service_elements() {
            let body = "<Servicos><Outro><cServico><Codigo>1</Codigo></cServico></Outro></Servicos>";
            assert!(parse_response(body.as_bytes()).unwrap_err().is_parse_error());
        }

        #[test]
        fn empty_service_element_is_an_entry() {
            let entries = parse_response(b"<Servicos><cServico/></Servicos>").unwrap();
            assert_eq!(entries.len(), 1);
            assert!(entries[0].service_code().is_none());
        }

        #[test]
        fn decodes_declared_latin1() {
            let body = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\" ?>\
                <Servicos><cServico><Codigo>40010</Codigo>\
                <MsgErro>CEP de destino inv\xe1lido. Servi\xe7o suspenso</MsgErro>\
                </cServico></Servicos>";
            let entries = parse_response(body).unwrap();
            assert_eq!(
                entries[0].error_message(),
                Some("CEP de destino inválido. Serviço suspenso")
            );
        }

        #[test]
        fn undeclared_encoding_is_utf8() {
            let body = "<Servicos><cServico><MsgErro>Área restrita</MsgErro></cServico></Servicos>";
            let entries = parse_response(body.as_bytes()).unwrap();
            assert_eq!(entries[0].error_message(), Some("Área restrita"));
        }

        #[test]
        fn empty_amount_and_deadline_read_as_zero() {
            let body = b"<Servicos><cServico><Codigo>40010</Codigo><Valor></Valor>\
                <PrazoEntrega></PrazoEntrega><Erro>0</Erro></cServico></Servicos>";
            let entries = parse_response(body).unwrap();
            assert_eq!(entries[0].value(), Some(Decimal::ZERO));
            assert_eq!(entries[0].delivery_days(), Some(0));
        }

        #[test]
        fn rejects_document_without_services() {
            let err = parse_response(b"<Servicos></Servicos>").unwrap_err();
            assert!(err.is_parse_error());
        }

        #[test]
        fn rejects_non_xml() {
            assert!(parse_response(b"").unwrap_err().is_parse_error());
            assert!(parse_response(b"Service Unavailable").unwrap_err().is_parse_error());
        }

        #[test]
        fn rejects_mismatched_tags() {
            let err = parse_response(b"<Servicos><cServico></Servicos>").unwrap_err();
            assert!(err.is_parse_error());
        }

        #[test]
        fn rejects_truncated_document() {
            let err = parse_response(b"<Servicos><cServico><Codigo>40010</Codigo>").unwrap_err();
            assert!(err.is_parse_error());
        }
    }

    mod service_entry {
        use super::*;

        #[test]
        fn typed_fields() {
            let entry = ServiceEntry::from_fields([
                ("Codigo", "41106"),
                ("Valor", "1.025,50"),
                ("PrazoEntrega", "7"),
                ("Erro", "0"),
            ]);
            assert_eq!(entry.service_code(), Some(ServiceCode::PAC));
            assert_eq!(entry.value(), Some(Decimal::new(102550, 2)));
            assert_eq!(entry.delivery_days(), Some(7));
            assert!(!entry.is_error());
        }

        #[test]
        fn missing_fields_are_absent() {
            let entry = ServiceEntry::from_fields([("Codigo", "40010")]);
            assert_eq!(entry.value(), None);
            assert_eq!(entry.delivery_days(), None);
            assert_eq!(entry.error_code(), 0);
        }

        #[test]
        fn unreadable_fields_read_as_zero() {
            let entry = ServiceEntry::from_fields([("Valor", "n/d"), ("PrazoEntrega", "-")]);
            assert_eq!(entry.value(), Some(Decimal::ZERO));
            assert_eq!(entry.delivery_days(), Some(0));
        }

        #[test]
        fn non_zero_error_flags_entry() {
            for code in ["1", "-3", "010", "7"] {
                let entry = ServiceEntry::from_fields([("Erro", code)]);
                assert!(entry.is_error(), "Erro={code} should flag the entry");
            }
        }

        #[test]
        fn comma_amount() {
            assert_eq!(parse_amount("12,34"), Some(Decimal::new(1234, 2)));
            assert_eq!(parse_amount("12.34"), Some(Decimal::new(1234, 2)));
            assert_eq!(parse_amount("abc"), None);
        }
    }
}
