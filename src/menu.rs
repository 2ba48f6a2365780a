//! Interactive menu session
//!
//! This module contains the menu driver: a thin dispatcher that collects
//! field values from the caller, resolves the target hotel through the
//! registry, and invokes exactly one façade operation per selection. All
//! outcomes, including the recoverable errors, are rendered as text; nothing
//! in this loop mutates state directly.
//!
//! The driver is generic over its input and output streams so sessions can
//! be exercised in tests with in-memory buffers.

use crate::hotel::Hotel;
use crate::identity::{HotelAgent, User};
use crate::management::{self, ManagementError, ManagementResult};
use crate::registry::Registry;
use std::io::{BufRead, Write};

/// Caller role behind a shared admin/agent menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Admin,
    Agent,
}

/// Interactive menu driver over a registry
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a new menu over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the session until the caller exits or input ends
    pub fn run(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        loop {
            writeln!(self.output, "-----------Main Menu:-----------")?;
            writeln!(self.output, "0. Exit")?;
            writeln!(self.output, "1. Admin Operations")?;
            writeln!(self.output, "2. User Operations")?;
            writeln!(self.output, "3. Hotel Agent Operations")?;

            match self.read_choice()? {
                None | Some(0) => return Ok(()),
                Some(1) => self.admin_menu(registry)?,
                Some(2) => self.user_session(registry)?,
                Some(3) => self.agent_session(registry)?,
                Some(_) => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn admin_menu(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        loop {
            writeln!(self.output, "-----------Admin Operations Menu:-----------")?;
            writeln!(self.output, "0. Back to Main Menu")?;
            writeln!(self.output, "1. Add New Hotel")?;
            writeln!(self.output, "2. Remove a Hotel")?;
            writeln!(self.output, "3. Add facilities to a Hotel")?;
            writeln!(self.output, "4. Set number of rooms for a Hotel")?;

            match self.read_choice()? {
                None | Some(0) => return Ok(()),
                Some(1) => self.add_hotel(registry)?,
                Some(2) => self.remove_hotel(registry)?,
                Some(3) => self.add_facility(registry, Role::Admin)?,
                Some(4) => self.set_room_count(registry, Role::Admin)?,
                Some(_) => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_hotel(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name: ")?;
        let location = self.prompt("Enter hotel location: ")?;
        let Some(rooms) = self.prompt_number("Enter number of rooms: ")? else {
            return Ok(());
        };

        writeln!(self.output, "Enter facilities (type 'done' to finish):")?;
        let mut facilities = Vec::new();
        loop {
            let Some(facility) = self.read_line()? else { break };
            if facility == "done" {
                break;
            }
            facilities.push(facility);
        }

        management::admin::add_hotel(registry, Hotel::new(name, location, rooms, facilities));
        writeln!(self.output, "Hotel added.")?;
        Ok(())
    }

    fn remove_hotel(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name to remove: ")?;
        // Removal matches name + location, so resolve the first name match
        // and remove everything equal to it.
        match registry.find_hotel_by_name(&name).cloned() {
            Some(hotel) => {
                let removed = management::admin::remove_hotel(registry, &hotel);
                writeln!(self.output, "Removed {} hotel(s).", removed)?;
            }
            None => writeln!(self.output, "Hotel not found.")?,
        }
        Ok(())
    }

    fn add_facility(&mut self, registry: &mut Registry, role: Role) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name to add facility: ")?;
        let facility = self.prompt("Enter facility: ")?;
        match registry.find_hotel_by_name_mut(&name) {
            Some(hotel) => {
                match role {
                    Role::Admin => management::admin::add_facility(hotel, facility),
                    Role::Agent => management::agent::add_facility(hotel, facility),
                }
                writeln!(self.output, "Facility added.")?;
            }
            None => writeln!(self.output, "Hotel not found.")?,
        }
        Ok(())
    }

    fn set_room_count(&mut self, registry: &mut Registry, role: Role) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name to update rooms: ")?;
        let Some(rooms) = self.prompt_number("Enter number of rooms: ")? else {
            return Ok(());
        };
        match registry.find_hotel_by_name_mut(&name) {
            Some(hotel) => {
                match role {
                    Role::Admin => management::admin::update_room_count(hotel, rooms),
                    Role::Agent => management::agent::update_room_count(hotel, rooms),
                }
                writeln!(self.output, "Room count updated.")?;
            }
            None => writeln!(self.output, "Hotel not found.")?,
        }
        Ok(())
    }

    fn user_session(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        writeln!(self.output, "-----------User login/register:-----------")?;
        let name = self.prompt("Enter name: ")?;
        let id = self.prompt("Enter user id: ")?;

        let Some(user) = User::new(name, id) else {
            writeln!(self.output, "User id must not be empty.")?;
            return Ok(());
        };

        match registry.register_user(user.clone()) {
            Ok(()) => writeln!(self.output, "User login success")?,
            Err(ManagementError::AlreadyRegistered { .. }) => {
                writeln!(self.output, "User is registered already")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        loop {
            writeln!(self.output, "-----------User Operations Menu:-----------")?;
            writeln!(self.output, "0. Back to Main Menu")?;
            writeln!(self.output, "1. Book a Hotel")?;
            writeln!(self.output, "2. Checkout")?;
            writeln!(self.output, "3. Add a rating and review to hotel")?;
            writeln!(self.output, "4. View a Hotel")?;

            match self.read_choice()? {
                None | Some(0) => return Ok(()),
                Some(1) => self.book_room(registry, &user)?,
                Some(2) => self.check_out(registry, &user)?,
                Some(3) => self.rate_and_review(registry)?,
                Some(4) => self.view_hotel(registry)?,
                Some(_) => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn book_room(&mut self, registry: &mut Registry, user: &User) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name: ")?;
        let Some(rooms) = self.prompt_number("Enter number of rooms to book: ")? else {
            return Ok(());
        };
        match registry.find_hotel_by_name_mut(&name) {
            Some(hotel) => match management::user::book_room(user, hotel, rooms) {
                Ok(()) => writeln!(self.output, "Booking confirmed.")?,
                Err(ManagementError::InsufficientRooms { .. }) => {
                    writeln!(self.output, "Hotel does not have enough rooms")?;
                }
                Err(e) => return Err(e),
            },
            None => writeln!(self.output, "Hotel not found.")?,
        }
        Ok(())
    }

    fn check_out(&mut self, registry: &mut Registry, user: &User) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name: ")?;
        let Some(rooms) = self.prompt_number("Enter number of rooms to checkout: ")? else {
            return Ok(());
        };
        match registry.find_hotel_by_name_mut(&name) {
            Some(hotel) => {
                management::user::check_out(user, hotel, rooms);
                writeln!(self.output, "Checked out.")?;
            }
            None => writeln!(self.output, "Hotel not found.")?,
        }
        Ok(())
    }

    fn rate_and_review(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name to review: ")?;
        let Some(rating) = self.prompt_number("Enter rating (1-5): ")? else {
            return Ok(());
        };
        let review = self.prompt("Enter review: ")?;
        match registry.find_hotel_by_name_mut(&name) {
            Some(hotel) => {
                // Rating folds in before the review lands; the aggregation
                // rule depends on this order.
                management::user::rate_and_review(hotel, rating, review);
                writeln!(self.output, "Thank you for your feedback.")?;
            }
            None => writeln!(self.output, "Hotel not found.")?,
        }
        Ok(())
    }

    fn view_hotel(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        let name = self.prompt("Enter hotel name: ")?;
        match registry.find_hotel_by_name(&name) {
            Some(hotel) => write!(self.output, "{}", hotel.summary())?,
            None => writeln!(self.output, "Hotel not found.")?,
        }
        Ok(())
    }

    fn agent_session(&mut self, registry: &mut Registry) -> ManagementResult<()> {
        writeln!(self.output, "-----------Hotel Agent login/register:-----------")?;
        let name = self.prompt("Enter name: ")?;
        let id = self.prompt("Enter agent id: ")?;

        let Some(agent) = HotelAgent::new(name, id) else {
            writeln!(self.output, "Agent id must not be empty.")?;
            return Ok(());
        };

        match registry.register_agent(agent) {
            Ok(()) => writeln!(self.output, "Hotel Agent login success")?,
            Err(ManagementError::AlreadyRegistered { .. }) => {
                writeln!(self.output, "Hotel agent is registered already")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        loop {
            writeln!(self.output, "-----------Hotel Agent Operations Menu:-----------")?;
            writeln!(self.output, "0. Back to Main Menu")?;
            writeln!(self.output, "1. Update rooms for a Hotel")?;
            writeln!(self.output, "2. Add a facility to a Hotel")?;

            match self.read_choice()? {
                None | Some(0) => return Ok(()),
                Some(1) => self.set_room_count(registry, Role::Agent)?,
                Some(2) => self.add_facility(registry, Role::Agent)?,
                Some(_) => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    /// Read one trimmed line; `None` means input ended
    fn read_line(&mut self) -> ManagementResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print a prompt and read the reply; EOF yields an empty string
    fn prompt(&mut self, message: &str) -> ManagementResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Read a menu choice; `None` means input ended
    fn read_choice(&mut self) -> ManagementResult<Option<i64>> {
        match self.read_line()? {
            None => Ok(None),
            Some(line) => match line.parse() {
                Ok(n) => Ok(Some(n)),
                Err(_) => {
                    writeln!(self.output, "Invalid input.")?;
                    Ok(Some(-1))
                }
            },
        }
    }

    /// Prompt for a number; `None` means the reply was not a number
    fn prompt_number(&mut self, message: &str) -> ManagementResult<Option<i64>> {
        let reply = self.prompt(message)?;
        match reply.parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            }
        }
    }
}
