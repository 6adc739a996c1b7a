//! Outbound text for every intake turn.

use crate::catalogs::{ISSUE_CATEGORIES, TIME_SLOTS};
use crate::intake::states::ServiceRequest;

const PHONE_EXAMPLES: &str = "Accepted formats:\n- 082 123 4567\n- 0821234567\n- +27 82 123 4567";

pub const SERVICE_UNAVAILABLE: &str = "Sorry, we couldn't verify your details after several \
attempts, so this request has been cancelled. Our service is unavailable for this conversation \
right now. Please message us again later to start over.";

pub fn welcome(brand: &str) -> String {
    format!(
        "Welcome to {brand}! I'll help you book a refrigerator repair.\n\n\
         To get started, what's the best phone number to reach you?\n\n{PHONE_EXAMPLES}"
    )
}

pub fn greeting(brand: &str) -> String {
    format!(
        "Hello! Thanks for contacting {brand} refrigerator repairs.\n\n\
         Please share the best phone number to reach you.\n\n{PHONE_EXAMPLES}"
    )
}

pub fn name_prompt() -> String {
    "Thanks! And what's your full name?".to_string()
}

pub fn invalid_phone(remaining: u8) -> String {
    format!(
        "That doesn't look like a valid South African phone number. {}\n\n{PHONE_EXAMPLES}",
        attempts_remaining(remaining)
    )
}

pub fn email_prompt(name: &str) -> String {
    format!("Nice to meet you, {name}! What's your Gmail address? (e.g. name@gmail.com)")
}

pub fn invalid_email(remaining: u8) -> String {
    format!(
        "Please provide a valid Gmail address, for example name@gmail.com. {}",
        attempts_remaining(remaining)
    )
}

pub fn issue_menu() -> String {
    format!("Thanks! What's wrong with your refrigerator?\n\n{}", ISSUE_CATEGORIES.render_menu())
}

pub fn detail_prompt(category: &str) -> String {
    format!(
        "You selected: {category}.\n\nPlease describe the problem in a bit more detail, \
         or reply 'none' to skip."
    )
}

pub fn address_prompt() -> String {
    "I understand. Now, please provide your full address, including your city and province, \
     so we can send a technician to your location."
        .to_string()
}

pub fn invalid_address(remaining: u8) -> String {
    format!(
        "Sorry, we couldn't match that address to an area we service. Please include your city \
         or province, for example: 12 Long Street, Cape Town, Western Cape. {}",
        attempts_remaining(remaining)
    )
}

pub fn time_menu() -> String {
    format!(
        "Perfect! When would be a good time for our technician to visit?\n\n{}",
        TIME_SLOTS.render_menu()
    )
}

pub fn summary(brand: &str, request: &ServiceRequest) -> String {
    let mut text = String::from("Thank you! Here's a summary of your service request:\n\n");
    text.push_str(&format!("Name: {}\n", request.name));
    text.push_str(&format!("Phone: {}\n", request.phone));
    text.push_str(&format!("Email: {}\n", request.email));
    text.push_str(&format!("Address: {}\n", request.address));
    text.push_str(&format!("Appliance: {}\n", request.appliance_type));
    text.push_str(&format!("Issue: {}\n", request.issue_category));
    if !request.issue_detail.is_empty() {
        text.push_str(&format!("Details: {}\n", request.issue_detail));
    }
    text.push_str(&format!("Preferred Time: {}\n", request.preferred_time));
    text.push_str("Status: Service request submitted successfully!\n\n");
    text.push_str(&format!(
        "Our technician will contact you within 30 minutes to confirm the appointment. \
         Thank you for choosing {brand}!\n\n\
         Would you like to log another request? Reply 'yes' to start a new one."
    ));
    text
}

pub fn restart_prompt() -> String {
    format!(
        "Let's start a new service request. What's the best phone number to reach you?\n\n\
         {PHONE_EXAMPLES}"
    )
}

pub fn closing(brand: &str) -> String {
    format!(
        "Thank you for using {brand}! Your request has been processed. \
         Reply 'new' any time to book another repair."
    )
}

pub fn goodbye(brand: &str) -> String {
    format!("Thank you for using {brand}! Your request has been processed.")
}

fn attempts_remaining(remaining: u8) -> String {
    match remaining {
        1 => "You have 1 attempt remaining.".to_string(),
        n => format!("You have {n} attempts remaining."),
    }
}
