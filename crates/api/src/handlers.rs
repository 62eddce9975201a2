// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the event catalog and the ticket
//! lifecycle engine.
//!
//! Every handler follows the same discipline: authorize, validate,
//! persist, then compose the response and (where the operation calls
//! for one) an outbound notification. The purchase transition's
//! authority is the conditional update in the persistence layer, not
//! the read that precedes it; the read exists only to give losers a
//! precise conflict message.

use eventhub_domain::{
    Event, Ticket, validate_event_fields, validate_principal_fields, validate_ticket_type,
};
use eventhub_notify::Notification;
use eventhub_persistence::{EventChangeset, Persistence, PrincipalData};
use eventhub_qr::{QrPayloadFacts, QrRenderer, encode};
use tracing::info;

use crate::auth::{AuthenticatedPrincipal, AuthorizationService, Role};
use crate::error::{
    ApiError, translate_domain_error, translate_persistence_error, translate_qr_error,
};
use crate::notifications;
use crate::request_response::{
    CreateEventRequest, CreateEventResponse, CreatePrincipalRequest, CreatePrincipalResponse,
    CreateTicketRequest, CreateTicketResponse, DeleteEventResponse, DeletePrincipalResponse,
    DeleteTicketResponse, EventInfo, EventWithTicketsResponse, PurchaseTicketResponse, TicketInfo,
    UpdateEventRequest, UpdateEventResponse,
};

/// The result of an API operation that may carry an outbound
/// notification.
///
/// The notification is composed inside the operation but delivered by
/// the server after the response, fire-and-forget. Delivery failure is
/// logged and never affects the operation's outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The notification to fire after responding, if any.
    pub notification: Option<Notification>,
}

/// Fetches an event or reports `ResourceNotFound`.
fn resolve_event(persistence: &mut Persistence, event_id: i64) -> Result<Event, ApiError> {
    persistence
        .get_event(event_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
            message: String::from("Event not found"),
        })
}

/// Fetches a ticket or reports `ResourceNotFound`.
fn resolve_ticket(persistence: &mut Persistence, ticket_id: i64) -> Result<Ticket, ApiError> {
    persistence
        .get_ticket(ticket_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: String::from("Ticket not found"),
        })
}

/// Looks up the organizer's contact fields for payload and wire use.
///
/// A missing account yields `(None, None)`; the payload codec renders
/// those as `N/A`.
fn organizer_contact(
    persistence: &mut Persistence,
    organizer_id: i64,
) -> Result<(Option<String>, Option<String>), ApiError> {
    let principal: Option<PrincipalData> = persistence
        .get_principal(organizer_id)
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(principal.map_or((None, None), |p| (Some(p.name), Some(p.email))))
}

/// Captures the point-in-time payload facts for a ticket.
///
/// The facts deliberately exclude attendee data; the payload is an
/// authenticity proof, identical before and after purchase.
fn payload_facts(
    ticket: &Ticket,
    event: &Event,
    organizer_name: Option<String>,
    organizer_email: Option<String>,
) -> QrPayloadFacts {
    QrPayloadFacts {
        ticket_id: ticket.ticket_id.unwrap_or_default(),
        ticket_type: ticket.ticket_type.clone(),
        event_name: event.name.clone(),
        event_genre: event.genre.clone(),
        event_price: event.price,
        organizer_name,
        organizer_email,
        created_at: ticket.created_at.clone(),
    }
}

/// Creates an event via the API boundary with authorization.
///
/// This function:
/// - Verifies the principal is authorized (Organizer role required)
/// - Validates and trims the event fields
/// - Persists the event owned by the requesting organizer
/// - Composes the organizer confirmation email
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request to create an event
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an Organizer
/// - Any field validation fails (empty field, negative price)
/// - Persistence fails
pub fn create_event(
    persistence: &mut Persistence,
    request: CreateEventRequest,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<CreateEventResponse>, ApiError> {
    AuthorizationService::authorize_create_event(principal)?;

    let CreateEventRequest {
        name,
        description,
        genre,
        category,
        price,
    } = request;
    let event: Event = Event::new(&name, &description, &genre, &category, price, principal.id);
    validate_event_fields(&event).map_err(translate_domain_error)?;

    let event_id: i64 = persistence
        .create_event(&event)
        .map_err(|e| translate_persistence_error(&e))?;
    let stored: Event = resolve_event(persistence, event_id)?;

    info!(event_id, organizer_id = principal.id, "Event created");

    let notification: Notification = notifications::event_created(principal, &stored);
    let response: CreateEventResponse = CreateEventResponse {
        message: String::from("Event created successfully"),
        event: EventInfo::from_event(
            &stored,
            Some(principal.name.clone()),
            Some(principal.email.clone()),
        ),
    };

    Ok(ApiResult {
        response,
        notification: Some(notification),
    })
}

/// Retrieves an event with all its tickets.
///
/// Read-only; this is the polling surface for ticket availability.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `event_id` - The event to fetch
///
/// # Errors
///
/// Returns an error if the event does not exist or persistence fails.
pub fn get_event(
    persistence: &mut Persistence,
    event_id: i64,
) -> Result<EventWithTicketsResponse, ApiError> {
    let event: Event = resolve_event(persistence, event_id)?;
    let (organizer_name, organizer_email) = organizer_contact(persistence, event.organizer_id)?;

    let tickets: Vec<TicketInfo> = persistence
        .list_tickets_for_event(event_id)
        .map_err(|e| translate_persistence_error(&e))?
        .iter()
        .map(TicketInfo::from)
        .collect();

    Ok(EventWithTicketsResponse {
        event: EventInfo::from_event(&event, organizer_name, organizer_email),
        tickets,
    })
}

/// Updates an event via the API boundary with authorization.
///
/// Ownership is enforced at the storage conditional: the UPDATE is
/// scoped to the requesting organizer, so a non-owner's request matches
/// zero rows and reports not-found, exactly as if the event did not
/// exist. The owning organizer is immutable.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `event_id` - The event to update
/// * `request` - The fields to change
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an Organizer
/// - A provided field is empty or the price is negative
/// - The event does not exist or is not owned by the principal
pub fn update_event(
    persistence: &mut Persistence,
    event_id: i64,
    request: UpdateEventRequest,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<UpdateEventResponse>, ApiError> {
    AuthorizationService::authorize_update_event(principal)?;

    let changes: EventChangeset = EventChangeset {
        name: trimmed_field("name", request.name)?,
        description: trimmed_field("description", request.description)?,
        genre: trimmed_field("genre", request.genre)?,
        category: trimmed_field("category", request.category)?,
        price: validate_price_field(request.price)?,
    };

    if changes.is_empty() {
        // Nothing to change; still report not-found for foreign events.
        let event: Event = resolve_event(persistence, event_id)?;
        if event.organizer_id != principal.id {
            return Err(not_found_or_unauthorized());
        }
        return Ok(ApiResult {
            response: UpdateEventResponse {
                message: String::from("Event updated successfully"),
                event: EventInfo::from_event(
                    &event,
                    Some(principal.name.clone()),
                    Some(principal.email.clone()),
                ),
            },
            notification: None,
        });
    }

    let rows: usize = persistence
        .update_event_for_organizer(event_id, principal.id, &changes)
        .map_err(|e| translate_persistence_error(&e))?;
    if rows == 0 {
        return Err(not_found_or_unauthorized());
    }

    let stored: Event = resolve_event(persistence, event_id)?;
    info!(event_id, organizer_id = principal.id, "Event updated");

    Ok(ApiResult {
        response: UpdateEventResponse {
            message: String::from("Event updated successfully"),
            event: EventInfo::from_event(
                &stored,
                Some(principal.name.clone()),
                Some(principal.email.clone()),
            ),
        },
        notification: None,
    })
}

/// Deletes an event and every ticket referencing it.
///
/// The owning organizer and admins may delete; the ticket cascade is a
/// single bulk delete keyed by the event, run before the event row is
/// removed. No cross-table transaction is taken: a failure between the
/// two statements can only leave the event without tickets, never
/// tickets without meaning.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `event_id` - The event to delete
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The principal is an attendee
/// - The event does not exist, or the principal is an organizer that
///   does not own it
pub fn delete_event(
    persistence: &mut Persistence,
    event_id: i64,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<DeleteEventResponse>, ApiError> {
    AuthorizationService::authorize_delete_event(principal)?;

    let event: Event = resolve_event(persistence, event_id)?;
    if principal.role == Role::Organizer && event.organizer_id != principal.id {
        return Err(not_found_or_unauthorized());
    }

    let deleted_tickets: usize = persistence
        .delete_tickets_for_event(event_id)
        .map_err(|e| translate_persistence_error(&e))?;
    let rows: usize = persistence
        .delete_event(event_id)
        .map_err(|e| translate_persistence_error(&e))?;
    if rows == 0 {
        return Err(not_found_or_unauthorized());
    }

    info!(
        event_id,
        deleted_tickets,
        requester = principal.id,
        "Event deleted with ticket cascade"
    );

    let notification: Notification =
        notifications::event_deleted(principal, &event, deleted_tickets);

    Ok(ApiResult {
        response: DeleteEventResponse {
            message: String::from("Event and associated tickets deleted successfully"),
            deleted_tickets,
        },
        notification: Some(notification),
    })
}

/// Creates a ticket against an event via the API boundary.
///
/// This function:
/// - Verifies the principal is authorized (Organizer owning the event)
/// - Validates the ticket type
/// - Persists the ticket in the Available state
/// - Synchronously encodes and renders the QR payload from the ticket,
///   its event, and the organizer, and stores the image
///
/// Renderer failure is fatal to the call; a ticket is never returned
/// without its proof artifact.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `renderer` - The QR image renderer
/// * `event_id` - The event to issue the ticket against
/// * `request` - The ticket details
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an Organizer
/// - The ticket type is empty
/// - The event does not exist or is not owned by the principal
/// - Rendering or persistence fails
pub fn create_ticket(
    persistence: &mut Persistence,
    renderer: &dyn QrRenderer,
    event_id: i64,
    request: CreateTicketRequest,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<CreateTicketResponse>, ApiError> {
    AuthorizationService::authorize_create_ticket(principal)?;

    let CreateTicketRequest { ticket_type } = request;
    let ticket_type: &str = ticket_type.trim();
    validate_ticket_type(ticket_type).map_err(translate_domain_error)?;

    let event: Event = resolve_event(persistence, event_id)?;
    if event.organizer_id != principal.id {
        return Err(not_found_or_unauthorized());
    }

    let ticket_id: i64 = persistence
        .create_ticket(event_id, ticket_type)
        .map_err(|e| translate_persistence_error(&e))?;
    let mut ticket: Ticket = resolve_ticket(persistence, ticket_id)?;

    let facts: QrPayloadFacts = payload_facts(
        &ticket,
        &event,
        Some(principal.name.clone()),
        Some(principal.email.clone()),
    );
    let qr_code: String = renderer
        .render(&encode(&facts))
        .map_err(|e| translate_qr_error(&e))?;

    persistence
        .set_ticket_qr_code(ticket_id, &qr_code)
        .map_err(|e| translate_persistence_error(&e))?;
    ticket.qr_code = Some(qr_code);

    info!(ticket_id, event_id, "Ticket created with QR payload");

    Ok(ApiResult {
        response: CreateTicketResponse {
            message: String::from("Ticket created successfully"),
            ticket: TicketInfo::from(&ticket),
        },
        notification: None,
    })
}

/// Retrieves a single ticket.
///
/// Read-only; attendees poll this for availability.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ticket_id` - The ticket to fetch
///
/// # Errors
///
/// Returns an error if the ticket does not exist or persistence fails.
pub fn get_ticket(persistence: &mut Persistence, ticket_id: i64) -> Result<TicketInfo, ApiError> {
    let ticket: Ticket = resolve_ticket(persistence, ticket_id)?;
    Ok(TicketInfo::from(&ticket))
}

/// Purchases a ticket via the API boundary.
///
/// The state guards on the freshly read ticket distinguish the two
/// conflict messages (already sold to someone else vs. already bound to
/// the requester). The transition itself is the conditional update:
/// if it matches zero rows — because another purchase landed between
/// the read and the write — the operation reports the same conflict as
/// the already-sold path. The QR payload is recomputed before the
/// transition and stored with it; its content is attendee-free by
/// construction.
///
/// On success the purchase confirmation, carrying the rendered QR
/// image, is composed for fire-and-forget delivery. Purchase success is
/// defined purely by the persisted state change.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `renderer` - The QR image renderer
/// * `ticket_id` - The ticket to purchase
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an Attendee
/// - The ticket does not exist
/// - The ticket is no longer Available (`Conflict`)
/// - Rendering or persistence fails
pub fn purchase_ticket(
    persistence: &mut Persistence,
    renderer: &dyn QrRenderer,
    ticket_id: i64,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<PurchaseTicketResponse>, ApiError> {
    AuthorizationService::authorize_purchase_ticket(principal)?;

    let ticket: Ticket = resolve_ticket(persistence, ticket_id)?;

    // Diagnostic guard only: produces the precise conflict message for
    // tickets already sold at read time. The authoritative guard is the
    // conditional update below.
    ticket
        .state
        .purchase(principal.id)
        .map_err(translate_domain_error)?;

    let event: Event = resolve_event(persistence, ticket.event_id)?;
    let (organizer_name, organizer_email) = organizer_contact(persistence, event.organizer_id)?;

    let facts: QrPayloadFacts = payload_facts(&ticket, &event, organizer_name, organizer_email);
    let qr_code: String = renderer
        .render(&encode(&facts))
        .map_err(|e| translate_qr_error(&e))?;

    let rows: usize = persistence
        .mark_ticket_sold(ticket_id, principal.id, &qr_code)
        .map_err(|e| translate_persistence_error(&e))?;
    if rows == 0 {
        // Lost the race: someone else's conditional update matched
        // first. Indistinguishable from finding the ticket sold.
        return Err(ApiError::Conflict {
            message: String::from("Ticket is no longer available"),
        });
    }

    let sold: Ticket = resolve_ticket(persistence, ticket_id)?;
    info!(ticket_id, attendee_id = principal.id, "Ticket purchased");

    let notification: Notification = notifications::ticket_purchased(principal, &sold, &event);

    Ok(ApiResult {
        response: PurchaseTicketResponse {
            message: String::from("Ticket purchased successfully"),
            ticket: TicketInfo::from(&sold),
        },
        notification: Some(notification),
    })
}

/// Deletes a ticket via the API boundary.
///
/// Admin-only unconditional hard delete; no state precondition.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ticket_id` - The ticket to delete
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if the principal is not an Admin or the ticket does
/// not exist.
pub fn delete_ticket(
    persistence: &mut Persistence,
    ticket_id: i64,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<DeleteTicketResponse>, ApiError> {
    AuthorizationService::authorize_delete_ticket(principal)?;

    let rows: usize = persistence
        .delete_ticket(ticket_id)
        .map_err(|e| translate_persistence_error(&e))?;
    if rows == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: String::from("Ticket not found"),
        });
    }

    info!(ticket_id, admin_id = principal.id, "Ticket deleted");

    Ok(ApiResult {
        response: DeleteTicketResponse {
            message: String::from("Ticket deleted successfully"),
        },
        notification: None,
    })
}

/// Provisions a principal on behalf of the external identity gate.
///
/// Admin-only. Credentials and token issuance stay with the identity
/// service; this stores only the fields the ticketing core needs.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The principal details
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an Admin
/// - The name or email is invalid, or the role is unknown
/// - The email is already registered (`Conflict`)
pub fn create_principal(
    persistence: &mut Persistence,
    request: CreatePrincipalRequest,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<CreatePrincipalResponse>, ApiError> {
    AuthorizationService::authorize_manage_principals(principal)?;

    let CreatePrincipalRequest { name, email, role } = request;
    let name: &str = name.trim();
    let email: &str = email.trim();
    validate_principal_fields(name, email).map_err(translate_domain_error)?;

    let role: Role = Role::parse(role.trim()).ok_or_else(|| ApiError::InvalidInput {
        field: String::from("role"),
        message: String::from("Role must be attendee, organizer, or admin"),
    })?;

    let existing: Option<PrincipalData> = persistence
        .get_principal_by_email(email)
        .map_err(|e| translate_persistence_error(&e))?;
    if existing.is_some() {
        return Err(ApiError::Conflict {
            message: String::from("Email already registered"),
        });
    }

    let id: i64 = persistence
        .create_principal(name, email, role.as_str())
        .map_err(|e| translate_persistence_error(&e))?;

    info!(principal_id = id, role = role.as_str(), "Principal created");

    Ok(ApiResult {
        response: CreatePrincipalResponse {
            message: String::from("Principal created successfully"),
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
        },
        notification: None,
    })
}

/// Deletes a principal account with its role-dependent cascade.
///
/// - Attendee: every bound ticket is released back to Available — the
///   tickets are organizer inventory, not attendee possessions — then
///   the account row is removed.
/// - Organizer: the two-level cascade removes every ticket of every
///   owned event, then the events, then the account.
/// - Admin: self-deletion is refused; otherwise the account is removed.
///
/// Cascades are bulk statements keyed by foreign key.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `principal_id` - The account to delete
/// * `principal` - The authenticated principal performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an Admin
/// - The target account does not exist
/// - An admin attempts to delete their own account (`Conflict`)
pub fn delete_principal(
    persistence: &mut Persistence,
    principal_id: i64,
    principal: &AuthenticatedPrincipal,
) -> Result<ApiResult<DeletePrincipalResponse>, ApiError> {
    AuthorizationService::authorize_manage_principals(principal)?;

    let target: PrincipalData = persistence
        .get_principal(principal_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Principal"),
            message: String::from("Principal not found"),
        })?;

    let target_role: Role = Role::parse(&target.role).ok_or_else(|| ApiError::Internal {
        message: String::from("Stored principal role is invalid"),
    })?;

    match target_role {
        Role::Attendee => {
            let released: usize = persistence
                .release_tickets_for_attendee(principal_id)
                .map_err(|e| translate_persistence_error(&e))?;
            persistence
                .delete_principal(principal_id)
                .map_err(|e| translate_persistence_error(&e))?;

            info!(principal_id, released, "Attendee deleted, tickets released");

            Ok(ApiResult {
                response: DeletePrincipalResponse {
                    message: String::from(
                        "Attendee deleted successfully. Associated tickets made available again.",
                    ),
                    released_tickets: Some(released),
                    deleted_events: None,
                    deleted_tickets: None,
                },
                notification: Some(notifications::attendee_deleted(
                    principal,
                    &target.name,
                    &target.email,
                    released,
                )),
            })
        }
        Role::Organizer => {
            let event_ids: Vec<i64> = persistence
                .list_event_ids_for_organizer(principal_id)
                .map_err(|e| translate_persistence_error(&e))?;
            let deleted_tickets: usize = persistence
                .delete_tickets_for_events(&event_ids)
                .map_err(|e| translate_persistence_error(&e))?;
            let deleted_events: usize = persistence
                .delete_events_for_organizer(principal_id)
                .map_err(|e| translate_persistence_error(&e))?;
            persistence
                .delete_principal(principal_id)
                .map_err(|e| translate_persistence_error(&e))?;

            info!(
                principal_id,
                deleted_events, deleted_tickets, "Organizer deleted with two-level cascade"
            );

            Ok(ApiResult {
                response: DeletePrincipalResponse {
                    message: String::from(
                        "Organizer deleted successfully. Associated events and tickets removed.",
                    ),
                    released_tickets: None,
                    deleted_events: Some(deleted_events),
                    deleted_tickets: Some(deleted_tickets),
                },
                notification: Some(notifications::organizer_deleted(
                    principal,
                    &target.name,
                    &target.email,
                    deleted_events,
                    deleted_tickets,
                )),
            })
        }
        Role::Admin => {
            if principal_id == principal.id {
                return Err(ApiError::Conflict {
                    message: String::from("You cannot delete your own admin account"),
                });
            }
            persistence
                .delete_principal(principal_id)
                .map_err(|e| translate_persistence_error(&e))?;

            info!(principal_id, "Admin account deleted");

            Ok(ApiResult {
                response: DeletePrincipalResponse {
                    message: String::from("Admin deleted successfully"),
                    released_tickets: None,
                    deleted_events: None,
                    deleted_tickets: None,
                },
                notification: Some(notifications::admin_deleted(
                    principal,
                    &target.name,
                    &target.email,
                )),
            })
        }
    }
}

/// The shared not-found report for missing and foreign events.
///
/// Ownership failures deliberately read the same as absence so the API
/// does not confirm which events exist to non-owners.
fn not_found_or_unauthorized() -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Event"),
        message: String::from("Event not found or unauthorized"),
    }
}

/// Trims an optional text field, rejecting blank updates.
fn trimmed_field(field: &str, value: Option<String>) -> Result<Option<String>, ApiError> {
    match value {
        Some(raw) => {
            let trimmed: &str = raw.trim();
            if trimmed.is_empty() {
                return Err(ApiError::InvalidInput {
                    field: field.to_string(),
                    message: format!("{field} cannot be blank"),
                });
            }
            Ok(Some(trimmed.to_string()))
        }
        None => Ok(None),
    }
}

/// Revalidates an optional price update.
fn validate_price_field(price: Option<f64>) -> Result<Option<f64>, ApiError> {
    match price {
        Some(value) if !value.is_finite() => Err(ApiError::InvalidInput {
            field: String::from("price"),
            message: String::from("Price must be a finite number"),
        }),
        Some(value) if value < 0.0 => Err(ApiError::InvalidInput {
            field: String::from("price"),
            message: String::from("Price cannot be negative"),
        }),
        other => Ok(other),
    }
}
