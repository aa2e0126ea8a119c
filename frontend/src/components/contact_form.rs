use log::{error, info};
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactIntent, ServiceType};

fn open_in_new_tab(url: &str) {
    let Some(window) = window() else {
        error!("No window to open WhatsApp link in");
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        error!("Failed to open WhatsApp link: {:?}", err);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let intent = use_state(ContactIntent::default);

    let on_name = {
        let intent = intent.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            intent.set(ContactIntent {
                sender_name: input.value(),
                ..(*intent).clone()
            });
        })
    };

    let on_pet_name = {
        let intent = intent.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            intent.set(ContactIntent {
                pet_name: input.value(),
                ..(*intent).clone()
            });
        })
    };

    let on_service = {
        let intent = intent.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let service_type = ServiceType::from_label(&select.value()).unwrap_or_default();
            intent.set(ContactIntent {
                service_type,
                ..(*intent).clone()
            });
        })
    };

    let on_message = {
        let intent = intent.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            intent.set(ContactIntent {
                free_text_message: textarea.value(),
                ..(*intent).clone()
            });
        })
    };

    let on_photo = {
        let intent = intent.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let picked = input.files().map_or(0, |files| files.length());
            if picked > 0 {
                intent.set(ContactIntent {
                    has_attachment_hint: true,
                    ..(*intent).clone()
                });
            }
        })
    };

    let on_submit = {
        let intent = intent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Opening WhatsApp for {:?}", intent.service_type);
            open_in_new_tab(&intent.whatsapp_link());
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-row">
                <div class="form-field">
                    <label for="contact-name">{"Seu Nome"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        name="name"
                        required=true
                        placeholder="João da Silva"
                        value={intent.sender_name.clone()}
                        oninput={on_name}
                    />
                </div>
                <div class="form-field">
                    <label for="contact-pet-name">{"Nome do Pet"}</label>
                    <input
                        id="contact-pet-name"
                        type="text"
                        name="petName"
                        required=true
                        placeholder="Rex / Mel"
                        value={intent.pet_name.clone()}
                        oninput={on_pet_name}
                    />
                </div>
            </div>

            <div class="form-field">
                <label for="contact-service">{"Serviço Desejado"}</label>
                <select id="contact-service" name="service" onchange={on_service}>
                    { for ServiceType::ALL.iter().map(|service| html! {
                        <option
                            key={service.label()}
                            value={service.label()}
                            selected={*service == intent.service_type}
                        >
                            {service.label()}
                        </option>
                    }) }
                </select>
            </div>

            <div class="form-field">
                <label for="contact-message">{"Mensagem ou Observação"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="3"
                    placeholder="Gostaria de agendar para terça-feira..."
                    value={intent.free_text_message.clone()}
                    oninput={on_message}
                />
            </div>

            <div class="form-field">
                <label>{"Foto de Referência (Opcional)"}</label>
                <div class="photo-drop">
                    <input type="file" accept="image/*" onchange={on_photo} />
                    if intent.has_attachment_hint {
                        <div class="photo-drop-status picked">
                            <span class="photo-drop-icon">{"✅"}</span>
                            <span>{"Arquivo selecionado!"}</span>
                            <small>{"Clique para trocar"}</small>
                        </div>
                    } else {
                        <div class="photo-drop-status">
                            <span class="photo-drop-icon">{"📤"}</span>
                            <span>{"Clique para enviar uma foto"}</span>
                            <small>{"JPG, PNG (Avisaremos no WhatsApp)"}</small>
                        </div>
                    }
                </div>
            </div>

            <button type="submit" class="whatsapp-submit">
                <img src="https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg" alt="WA" />
                {"Enviar via WhatsApp"}
            </button>
        </form>
    }
}
