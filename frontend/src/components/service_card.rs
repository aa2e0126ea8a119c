use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;

/// Body of a service card: either a short paragraph or a bullet list with
/// an optional highlighted header.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceDescription {
    PlainText(&'static str),
    StructuredList {
        header: Option<&'static str>,
        items: &'static [&'static str],
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: ServiceDescription,
    pub reveal_delay_ms: u32,
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "🩺",
        title: "Clínica Veterinária",
        description: ServiceDescription::StructuredList {
            header: Some("Apenas com hora marcada"),
            items: &[
                "Consulta",
                "Exames laboratoriais",
                "Ultrassonografia",
                "Raio-x",
                "Cirurgia",
                "Imunização (Vacina Imp.)",
            ],
        },
        reveal_delay_ms: 0,
    },
    Service {
        icon: "✂️",
        title: "Banho e Tosa",
        description: ServiceDescription::PlainText(
            "Estética animal com produtos hipoalergênicos e muito carinho para deixar seu pet lindo e cheiroso.",
        ),
        reveal_delay_ms: 100,
    },
    Service {
        icon: "🛍️",
        title: "Pet Shop",
        description: ServiceDescription::PlainText(
            "Rações premium, brinquedos, acessórios, petiscos e medicamentos veterinários.",
        ),
        reveal_delay_ms: 200,
    },
    Service {
        icon: "🐱",
        title: "Day Care",
        description: ServiceDescription::PlainText(
            "Um espaço seguro e divertido para seu pet passar o dia gastando energia e socializando.",
        ),
        reveal_delay_ms: 300,
    },
];

fn render_description(description: &ServiceDescription) -> Html {
    match description {
        ServiceDescription::PlainText(text) => html! { <p>{*text}</p> },
        ServiceDescription::StructuredList { header, items } => html! {
            <div class="service-list">
                if let Some(header) = header {
                    <div class="service-badge">{*header}</div>
                }
                <ul>
                    { for items.iter().map(|item| html! {
                        <li key={*item}>
                            <span class="service-bullet">{"↘"}</span>
                            <span>{*item}</span>
                        </li>
                    }) }
                </ul>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <ScrollReveal delay_ms={service.reveal_delay_ms}>
            <div class="service-card">
                <div class="service-icon">{service.icon}</div>
                <h3>{service.title}</h3>
                <div class="service-description">
                    { render_description(&service.description) }
                </div>
            </div>
        </ScrollReveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_and_stagger() {
        let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Clínica Veterinária", "Banho e Tosa", "Pet Shop", "Day Care"]);

        let delays: Vec<_> = SERVICES.iter().map(|s| s.reveal_delay_ms).collect();
        assert_eq!(delays, [0, 100, 200, 300]);
    }

    #[test]
    fn clinic_is_appointment_only_list() {
        match &SERVICES[0].description {
            ServiceDescription::StructuredList { header, items } => {
                assert_eq!(*header, Some("Apenas com hora marcada"));
                assert_eq!(items.len(), 6);
                assert_eq!(items.first(), Some(&"Consulta"));
                assert_eq!(items.last(), Some(&"Imunização (Vacina Imp.)"));
            }
            other => panic!("expected a structured list, got {:?}", other),
        }
    }

    #[test]
    fn other_services_are_plain_text() {
        for service in &SERVICES[1..] {
            assert!(matches!(service.description, ServiceDescription::PlainText(text) if !text.is_empty()));
        }
    }
}
