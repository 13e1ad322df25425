/*
* USB Task
*/

// Resources
use crate::resources::COMMAND_CHANNEL;
use crate::resources::CONSOLE_PIPE;
use crate::resources::USB_PACKET_SIZE;
use crate::resources::USB_LOG_BUFFER_SIZE;
use crate::resources::CONSOLE_POLL_MS;
use crate::resources::set_console_open;

// Library
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::class::cdc_acm::Receiver;
use embassy_usb::class::cdc_acm::Sender;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_futures::select::select;
use embassy_futures::select::Either;
use embassy_time::Duration;
use embassy_time::Timer;

type UsbDriver = Driver<'static, USB>;

#[embassy_executor::task]
pub async fn usb_device_task(mut usb: embassy_usb::UsbDevice<'static, UsbDriver>) {
    usb.run().await;
}

/// Host keystrokes go to the control loop one byte at a time. A full
/// channel drops the byte, like an overrun UART.
#[embassy_executor::task]
pub async fn console_rx_task(mut receiver: Receiver<'static, UsbDriver>) {
    let mut rx_buf = [0u8; USB_PACKET_SIZE];

    loop {
        receiver.wait_connection().await;
        log::info!("console connected");

        loop {
            match receiver.read_packet(&mut rx_buf).await {
                Ok(len) => {
                    for &byte in &rx_buf[..len] {
                        if COMMAND_CHANNEL.try_send(byte).is_err() {
                            log::warn!("command dropped: {}", byte);
                        }
                    }
                }
                Err(_) => break,
            }
        }

        log::info!("console disconnected");
    }
}

/// Drains the console pipe to the host. Without a terminal holding DTR the
/// bytes are discarded so the control loop never blocks on output.
#[embassy_executor::task]
pub async fn console_tx_task(mut sender: Sender<'static, UsbDriver>) {
    let mut tx_buf = [0u8; USB_PACKET_SIZE];

    loop {
        match select(CONSOLE_PIPE.read(&mut tx_buf), Timer::after(Duration::from_millis(CONSOLE_POLL_MS))).await {
            Either::First(len) => {
                if sender.dtr() && sender.write_packet(&tx_buf[..len]).await.is_err() {
                    log::warn!("console write failed, {} bytes lost", len);
                }
            }
            Either::Second(()) => {}
        }

        set_console_open(sender.dtr());
    }
}

#[embassy_executor::task]
pub async fn usb_logger_task(class: CdcAcmClass<'static, UsbDriver>) {
    embassy_usb_logger::with_class!(USB_LOG_BUFFER_SIZE, log::LevelFilter::Info, class).await;
}
