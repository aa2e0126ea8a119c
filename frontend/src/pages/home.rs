use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::dev_popup::DevPopup;
use crate::components::nav::{scroll_to_section, Nav, Section};
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::service_card::{ServiceCard, SERVICES};
use crate::config;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?q=80&w=2069&auto=format&fit=crop";

const ABOUT_FEATURES: [&str; 3] = [
    "Ambientes climatizados",
    "Equipamentos modernos",
    "Estacionamento fácil",
];

fn scroll_button(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(section))
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id={Section::Inicio.id()} class="hero">
            <div class="hero-blob hero-blob--pink"></div>
            <div class="hero-blob hero-blob--green"></div>

            <div class="container hero-content">
                <div class="hero-text">
                    <ScrollReveal>
                        <span class="hero-badge">{"CLÍNICA VETERINÁRIA & PET SHOP"}</span>
                        <h1>
                            {"Amor e cuidado que seu pet "}
                            <span class="accent-pink">{"merece!"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Seu melhor amigo em boas mãos. Atendimento especializado, banho e tosa e os melhores produtos em Candelária."}
                        </p>
                        <div class="hero-actions">
                            <button class="hero-cta" onclick={scroll_button(Section::Contato)}>
                                {"📅 Agendar Agora"}
                            </button>
                            <button class="hero-secondary" onclick={scroll_button(Section::Servicos)}>
                                {"Ver Serviços"}
                            </button>
                        </div>
                    </ScrollReveal>
                </div>

                <div class="hero-visual">
                    <ScrollReveal delay_ms={200}>
                        <div class="hero-image-wrap">
                            <div class="hero-image-shadow"></div>
                            <img src={HERO_IMAGE} alt="Cachorro feliz sendo abraçado" class="hero-image" />
                            <div class="rating-card">
                                <div class="rating-heart">{"❤"}</div>
                                <div>
                                    <p class="rating-label">{"Avaliação"}</p>
                                    <p class="rating-value">{"5.0 Estrelas"}</p>
                                </div>
                            </div>
                        </div>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id={Section::Servicos.id()} class="services">
            <div class="container">
                <div class="section-heading">
                    <ScrollReveal>
                        <h2>{"Nossos Serviços"}</h2>
                        <div class="heading-bar"></div>
                        <p>{"Oferecemos uma estrutura completa para a saúde e bem-estar do seu animalzinho."}</p>
                    </ScrollReveal>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard key={service.title} service={service.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::Sobre.id()} class="about">
            <div class="container">
                <div class="about-panel">
                    <div class="about-location">
                        <img src="/local.jpeg" alt="Interior da clínica" />
                        <div class="address-card">
                            <div class="address-pin">{"📍"}</div>
                            <h3>{"Rua Jaguarari n°2800"}</h3>
                            <p>{"Candelária, Natal - RN"}</p>
                            <span class="address-landmark">{"Em frente a ABO"}</span>
                        </div>
                    </div>

                    <div class="about-content">
                        <ScrollReveal>
                            <h2>{"Sobre a Pet Green"}</h2>
                            <p>
                                {"Localizada no coração de Candelária, a Pet Green nasceu do sonho de oferecer um atendimento veterinário humanizado e de excelência. Nossa equipe é treinada para tratar seu pet como parte da família."}
                            </p>
                            <ul class="about-features">
                                { for ABOUT_FEATURES.iter().map(|feature| html! {
                                    <li key={*feature}>
                                        <span class="check">{"✔"}</span>
                                        {*feature}
                                    </li>
                                }) }
                            </ul>
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="instagram-link">
                                {config::INSTAGRAM_HANDLE}
                            </a>
                        </ScrollReveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={Section::Contato.id()} class="contact">
            <div class="container contact-container">
                <ScrollReveal>
                    <div class="contact-panel">
                        <div class="contact-heading">
                            <span class="contact-kicker">{"Agendamento Fácil"}</span>
                            <h2>{"Agende pelo WhatsApp"}</h2>
                            <p>{"Preencha os dados e nós montaremos a mensagem para você."}</p>
                        </div>
                        <ContactForm />
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-main">
                    <div class="footer-logo">
                        {"🐶 Pet"}<span class="brand-accent">{"Green"}</span>
                    </div>
                    <p class="footer-legal">
                        {format!("© {} Pet Green. Todos os direitos reservados.", year)}
                        <br/>
                        {"Rua Jaguarari n°2800, Candelária - Natal/RN"}
                    </p>
                </div>
                <div class="footer-credit">
                    <span>{"Desenvolvido por"}</span>
                    <a href={config::DEVELOPER_SITE_URL} target="_blank" rel="noopener noreferrer">
                        {"</> UiCode.dev"}
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="petgreen">
            <Nav />
            <Hero />
            <Services />
            <About />
            <Contact />
            <Footer />
            <DevPopup />
            <style>
                {r#"
                .petgreen {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2937;
                    background: #f9fafb;
                    overflow-x: hidden;
                }
                .petgreen ::selection { background: #fbcfe8; }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .brand-accent { color: #16a34a; }
                .accent-pink { color: #ec4899; }

                /* Scroll reveal */
                .reveal {
                    opacity: 0;
                    transform: translateY(4rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .reveal.reveal--visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                /* Header */
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    background: #fff;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease-in-out;
                }
                .top-nav.scrolled {
                    padding: 0.5rem 0;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                    border-color: #dcfce7;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.5rem;
                    letter-spacing: -0.05em;
                    transition: transform 0.3s;
                }
                .top-nav.scrolled .nav-logo {
                    transform: scale(0.9);
                    transform-origin: left;
                }
                .nav-logo-badge {
                    background: #22c55e;
                    border-radius: 0.5rem;
                    padding: 0.3rem 0.5rem;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link, .mobile-link {
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 500;
                    color: #4b5563;
                    cursor: pointer;
                }
                .nav-link:hover { color: #ec4899; }
                .nav-cta {
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 1.25rem;
                    font-weight: 700;
                    color: #fff;
                    background: #22c55e;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .nav-cta:hover { transform: scale(1.05); }
                .top-nav.scrolled .nav-cta {
                    background: #ec4899;
                    font-size: 0.875rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s;
                }
                .mobile-menu nav {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem;
                }
                .mobile-link { text-align: left; }

                /* Hero */
                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 10rem 1rem 8rem;
                    background: linear-gradient(to bottom, #f0fdf4, #fff);
                }
                .hero-blob {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.3;
                }
                .hero-blob--pink { top: 5rem; right: -50px; background: #fbcfe8; }
                .hero-blob--green { bottom: 2.5rem; left: -50px; background: #bbf7d0; }
                .hero-content {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .hero-text, .hero-visual {
                    flex: 1;
                    position: relative;
                    z-index: 1;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #15803d;
                    font-size: 0.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 800;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 32rem;
                    margin-bottom: 2rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                }
                .hero-cta, .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-weight: 700;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .hero-cta {
                    border: none;
                    background: #16a34a;
                    color: #fff;
                    box-shadow: 0 10px 15px rgba(22, 163, 74, 0.3);
                }
                .hero-cta:hover { background: #15803d; }
                .hero-secondary {
                    background: #fff;
                    color: #16a34a;
                    border: 2px solid #dcfce7;
                }
                .hero-secondary:hover { border-color: #22c55e; }
                .hero-image-wrap { position: relative; }
                .hero-image-shadow {
                    position: absolute;
                    inset: 0;
                    background: #22c55e;
                    border-radius: 50%;
                    opacity: 0.1;
                    transform: translate(1rem, 1rem);
                }
                .hero-image {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 2.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: transform 0.5s;
                }
                .hero-image:hover { transform: translateY(-0.5rem); }
                .rating-card {
                    position: absolute;
                    bottom: 2rem;
                    left: -2rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #fff;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    animation: bounceSlow 3s infinite;
                }
                .rating-heart {
                    background: #fce7f3;
                    color: #ec4899;
                    border-radius: 50%;
                    padding: 0.5rem 0.7rem;
                }
                .rating-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #6b7280;
                    text-transform: uppercase;
                    margin: 0;
                }
                .rating-value { font-weight: 700; margin: 0; }
                @keyframes bounceSlow {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-8px); }
                }

                /* Services */
                .services {
                    padding: 5rem 0;
                    background: #fff;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .heading-bar {
                    width: 5rem;
                    height: 0.375rem;
                    background: #ec4899;
                    border-radius: 9999px;
                    margin: 0 auto 1rem;
                }
                .section-heading p {
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border-bottom: 4px solid #22c55e;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.2s, border-color 0.2s;
                }
                .service-card:hover {
                    border-color: #ec4899;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12);
                }
                .service-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #f0fdf4;
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .service-description {
                    flex-grow: 1;
                    color: #4b5563;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .service-badge {
                    background: #fef2f2;
                    border: 1px solid #fee2e2;
                    border-radius: 0.5rem;
                    padding: 0.5rem;
                    text-align: center;
                    color: #dc2626;
                    font-weight: 700;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 0.75rem;
                }
                .service-list ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .service-list li {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }
                .service-bullet {
                    color: #22c55e;
                    font-weight: 700;
                }

                /* About */
                .about {
                    padding: 5rem 0;
                    background: #f0fdf4;
                }
                .about-panel {
                    display: flex;
                    background: #fff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .about-location {
                    position: relative;
                    flex: 1;
                    min-height: 300px;
                    background: #e5e7eb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .about-location img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.8;
                }
                .address-card {
                    position: relative;
                    max-width: 20rem;
                    margin: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(8px);
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .address-pin { font-size: 2rem; }
                .address-card h3 { font-weight: 700; margin: 0.25rem 0; }
                .address-card p { color: #4b5563; font-size: 0.875rem; margin: 0; }
                .address-landmark {
                    display: inline-block;
                    margin-top: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    background: #dcfce7;
                    color: #15803d;
                    font-size: 0.75rem;
                    font-weight: 700;
                    border-radius: 9999px;
                }
                .about-content {
                    flex: 1;
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .about-content h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .about-content p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .about-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }
                .about-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                    color: #374151;
                }
                .check { color: #22c55e; }
                .instagram-link {
                    color: #ec4899;
                    font-weight: 700;
                    text-decoration: none;
                }
                .instagram-link:hover { text-decoration: underline; }

                /* Contact */
                .contact { padding: 5rem 0; }
                .contact-container { max-width: 48rem; }
                .contact-panel {
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 1.5rem;
                    padding: 3rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .contact-heading {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .contact-kicker {
                    color: #16a34a;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .contact-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0.5rem 0;
                }
                .contact-heading p { color: #6b7280; }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-field label {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #374151;
                }
                .form-field input[type="text"],
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    font: inherit;
                    outline: none;
                    transition: all 0.2s;
                }
                .form-field textarea { resize: none; }
                .form-field input[type="text"]:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    border-color: #22c55e;
                    box-shadow: 0 0 0 3px #bbf7d0;
                }
                .photo-drop {
                    position: relative;
                    border: 2px dashed #d1d5db;
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    text-align: center;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .photo-drop:hover { background: #f9fafb; }
                .photo-drop input[type="file"] {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0;
                    cursor: pointer;
                }
                .photo-drop-status {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    color: #6b7280;
                }
                .photo-drop-status.picked { color: #16a34a; }
                .photo-drop-icon { font-size: 2rem; }
                .whatsapp-submit {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #16a34a;
                    color: #fff;
                    font-weight: 700;
                    font-size: 1rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(22, 163, 74, 0.3);
                    transition: all 0.2s;
                }
                .whatsapp-submit:hover {
                    background: #15803d;
                    transform: scale(1.02);
                }
                .whatsapp-submit img {
                    width: 1.5rem;
                    height: 1.5rem;
                    filter: brightness(0) invert(1);
                }

                /* Footer */
                .site-footer {
                    background: #111827;
                    color: #fff;
                    padding: 3rem 0;
                }
                .footer-main {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .site-footer .brand-accent { color: #22c55e; }
                .footer-legal {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    text-align: right;
                }
                .footer-credit {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .footer-credit a {
                    color: #4ade80;
                    font-weight: 700;
                    text-decoration: none;
                }
                .footer-credit a:hover { color: #fff; }

                /* Developer credit popup */
                .dev-popup {
                    position: fixed;
                    bottom: 1rem;
                    right: 1rem;
                    z-index: 60;
                    width: 20rem;
                    padding: 1.25rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: all 0.5s ease-in-out;
                }
                .dev-popup--minimized {
                    width: 3.5rem;
                    height: 3.5rem;
                    padding: 0;
                    border-radius: 50%;
                    overflow: hidden;
                }
                .dev-popup--minimized:hover { transform: scale(1.1); }
                .dev-popup-restore {
                    width: 100%;
                    height: 100%;
                    border: none;
                    background: #111827;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .dev-popup-card {
                    position: relative;
                    animation: fadeIn 0.4s ease-in;
                }
                .dev-popup-minimize {
                    position: absolute;
                    top: -0.25rem;
                    right: -0.25rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    cursor: pointer;
                }
                .dev-popup-minimize:hover { color: #4b5563; }
                .dev-popup-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .dev-popup-header h4 {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .dev-popup-logo {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-weight: 700;
                    background: linear-gradient(135deg, #9333ea, #2563eb);
                }
                .dev-popup-tagline {
                    margin: 0;
                    font-size: 10px;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .dev-popup-text {
                    font-size: 0.75rem;
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .dev-popup-links {
                    display: flex;
                    gap: 0.5rem;
                }
                .dev-popup-links a {
                    flex: 1;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.375rem;
                    text-align: center;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .dev-popup-instagram { background: linear-gradient(to right, #a855f7, #ec4899); }
                .dev-popup-whatsapp { background: #22c55e; }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @media (max-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .nav-links, .nav-cta { display: none; }
                    .burger-menu { display: block; }
                    .mobile-menu { display: block; }
                    .mobile-menu.mobile-menu-open {
                        max-height: 16rem;
                        opacity: 1;
                        border-top: 1px solid #e5e7eb;
                    }
                    .hero { padding: 8rem 1rem 5rem; }
                    .hero-content {
                        flex-direction: column-reverse;
                        text-align: center;
                    }
                    .hero h1 { font-size: 2.25rem; }
                    .hero-subtitle { margin: 0 auto 2rem; }
                    .hero-actions {
                        flex-direction: column;
                        justify-content: center;
                    }
                    .rating-card { bottom: -1.5rem; left: -1rem; }
                    .services-grid { grid-template-columns: 1fr; }
                    .about-panel { flex-direction: column; }
                    .about-content, .contact-panel { padding: 2rem; }
                    .form-row { grid-template-columns: 1fr; }
                    .footer-main { flex-direction: column; }
                    .footer-legal { text-align: center; }
                    .footer-credit { flex-direction: column; align-items: center; }
                }
                "#}
            </style>
        </div>
    }
}
