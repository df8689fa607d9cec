//! End-to-end quotes over HTTP against a mock calculator.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use frete::domain::value_objects::enums::{PackageFormat, ServiceCode};
use frete::infrastructure::carriers::CorreiosClient;
use frete::infrastructure::config::CorreiosConfig;
use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CALCULATOR_PATH: &str = "/calculador/CalcPrecoPrazo.aspx";

const RESPONSE: &str = r#"<?xml version="1.0" encoding="ISO-8859-1" ?>
<Servicos>
  <cServico>
    <Codigo>40010</Codigo>
    <Valor>25,10</Valor>
    <PrazoEntrega>3</PrazoEntrega>
    <Erro>0</Erro>
    <MsgErro></MsgErro>
  </cServico>
  <cServico>
    <Codigo>41106</Codigo>
    <Valor>0,00</Valor>
    <PrazoEntrega>0</PrazoEntrega>
    <Erro>-888</Erro>
    <MsgErro><![CDATA[Erro ao calcular tarifa]]></MsgErro>
  </cServico>
</Servicos>"#;

fn client(server: &MockServer) -> CorreiosClient {
    let config = CorreiosConfig::default()
        .with_endpoint(format!("{}{}", server.uri(), CALCULATOR_PATH))
        .with_timeout_ms(2000);

    CorreiosClient::from_config("01310-100", &config)
        .unwrap()
        .destination("20040-020")
        .unwrap()
        .service(ServiceCode::SEDEX.get())
        .unwrap()
        .service(ServiceCode::PAC.get())
        .unwrap()
        .weight(Decimal::new(15, 1))
        .unwrap()
        .format(PackageFormat::Box)
        .dimensions(Decimal::from(20), Decimal::from(15), Some(Decimal::from(10)), None)
        .unwrap()
}

#[tokio::test]
async fn quotes_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .and(query_param("nCdServico", "40010,41106"))
        .and(query_param("sCepOrigem", "01310100"))
        .and(query_param("sCepDestino", "20040020"))
        .and(query_param("nVlPeso", "1.5"))
        .and(query_param("nCdFormato", "1"))
        .and(query_param("nVlComprimento", "20"))
        .and(query_param("nVlLargura", "15"))
        .and(query_param("nVlAltura", "10"))
        .and(query_param("nVlDiametro", "0"))
        .and(query_param("sCdMaoPropria", "N"))
        .and(query_param("sCdAvisoRecebimento", "N"))
        .and(query_param("StrRetorno", "XML"))
        .and(query_param("nIndicaCalculo", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client(&server);
    let quotes = client.result().await.unwrap();

    assert_eq!(quotes.len(), 1);
    let sedex = &quotes[&ServiceCode::SEDEX];
    assert_eq!(sedex.time(), Some(3));
    assert_eq!(sedex.cost(), Some(Decimal::new(2510, 2)));
    assert!(!quotes.contains_key(&ServiceCode::PAC));
}

#[tokio::test]
async fn repeated_calls_hit_the_network_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client(&server);
    let first = client.result().await.unwrap().clone();
    let second = client.result().await.unwrap().clone();

    assert_eq!(first, second);
}

#[tokio::test]
async fn latin1_body_without_charset_header() {
    let body = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\" ?>\
        <Servicos><cServico><Codigo>40010</Codigo><Valor>25,10</Valor>\
        <PrazoEntrega>3</PrazoEntrega><Erro>0</Erro>\
        <MsgErro>O CEP de destino est\xe1 sujeito a condi\xe7\xf5es especiais</MsgErro>\
        </cServico></Servicos>";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(&server)
        .await;

    let mut client = client(&server);
    let quotes = client.result().await.unwrap();

    assert_eq!(
        quotes[&ServiceCode::SEDEX].raw().error_message(),
        Some("O CEP de destino está sujeito a condições especiais")
    );
}

#[tokio::test]
async fn server_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).result().await.unwrap_err();
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn empty_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client(&server).result().await.unwrap_err();
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn html_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>Manutencao</body></html>"),
        )
        .mount(&server)
        .await;

    let err = client(&server).result().await.unwrap_err();
    assert!(err.is_parse_error());
}

#[tokio::test]
async fn contract_credentials_are_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .and(query_param("nCdEmpresa", "08082650"))
        .and(query_param("sDsSenha", "564321"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let config = CorreiosConfig::default()
        .with_endpoint(format!("{}{}", server.uri(), CALCULATOR_PATH))
        .with_contract("08082650", "564321");
    let mut client = CorreiosClient::from_config("01310100", &config)
        .unwrap()
        .destination("20040020")
        .unwrap()
        .service(40010)
        .unwrap()
        .weight(Decimal::ONE)
        .unwrap()
        .format(PackageFormat::Envelope)
        .dimensions(Decimal::from(16), Decimal::from(11), None, None)
        .unwrap();

    assert!(client.result().await.is_ok());
}
